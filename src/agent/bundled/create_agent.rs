use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::input::{AgentInput, AgentInputs};
use crate::agent::kind::AgentKind;

const INSTRUCTIONS: &str = "You are an Agent that is an expert in writing LLM Agent descriptions, which \
include both the system instructions and the initial Chat prompt for the Agent as described by the \
Developer. You should use your own system instructions and initial User Chat prompt as an example of \
what the Developer is looking for in your response.";

const DESCRIPTION_KEY: &str = "Agent Description";

/// Writes system instructions and an initial prompt for a described agent.
#[derive(Debug, Default)]
pub struct CreateAgentAgent {
    description: String,
}

impl CreateAgentAgent {
    pub const NAME: &'static str = "Create Agent";
}

impl AgentDefinition for CreateAgentAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> AgentKind {
        AgentKind::HumanAndLlmAssisted
    }

    fn instructions(&self) -> String {
        with_base_instructions(INSTRUCTIONS)
    }

    fn initial_prompt(&self) -> String {
        format!(
            "You are tasked with defining an Agent that follows this description:\n{}\n\n\
             Your output should only be the Agent's system instructions and their initial User Chat prompt.",
            self.description
        )
    }

    fn needed_inputs(&self) -> Vec<AgentInput> {
        vec![AgentInput::string(DESCRIPTION_KEY)]
    }

    fn parse_needed_inputs(&mut self, inputs: &AgentInputs) {
        self.description = inputs.string(DESCRIPTION_KEY);
    }
}
