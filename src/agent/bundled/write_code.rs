use crate::agent::context::AgentContext;
use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::input::{AgentInput, AgentInputs};
use crate::agent::kind::AgentKind;
use crate::capability::{self, Capability};

const INSTRUCTIONS: &str = "You are an Agent that writes production quality code. Use only the \
technologies the User listed. Explain the structure briefly, then provide the code. When the User \
asks you to save it, use createFile with one call per file.";

const TECHNOLOGIES_KEY: &str = "Technology List";
const DESCRIPTION_KEY: &str = "Code Description";

/// Writes code in a given set of technologies.
#[derive(Debug, Default)]
pub struct WriteCodeAgent {
    technologies: Vec<String>,
    description: String,
}

impl WriteCodeAgent {
    pub const NAME: &'static str = "Write Code";
}

impl AgentDefinition for WriteCodeAgent {
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
            "Using {}, write code that does the following:\n{}",
            self.technologies.join(", "),
            self.description
        )
    }

    fn needed_inputs(&self) -> Vec<AgentInput> {
        vec![
            AgentInput::list(TECHNOLOGIES_KEY),
            AgentInput::string(DESCRIPTION_KEY),
        ]
    }

    fn parse_needed_inputs(&mut self, inputs: &AgentInputs) {
        self.technologies = inputs.list(TECHNOLOGIES_KEY);
        self.description = inputs.string(DESCRIPTION_KEY);
    }

    fn capabilities(&self, ctx: &AgentContext) -> Vec<Capability> {
        vec![capability::io::create_file(ctx.file_root.clone())]
    }
}
