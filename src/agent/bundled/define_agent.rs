use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::kind::AgentKind;

const INSTRUCTIONS: &str = "You are an Agent that helps a Developer decide what a new LLM Agent should \
do. Interview the Developer one question at a time about the Agent's purpose, its inputs, the \
capabilities it needs and what a good answer from it looks like. When you have enough detail, \
summarize the Agent as a name, a one paragraph description and a list of its inputs.";

/// Interviews the developer to pin down a new agent.
#[derive(Debug, Default)]
pub struct DefineAgentAgent;

impl DefineAgentAgent {
    pub const NAME: &'static str = "Define Agent";
}

impl AgentDefinition for DefineAgentAgent {
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
        "Introduce yourself and ask me the first question about the Agent I want to define.".to_string()
    }
}
