use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::kind::AgentKind;

const INSTRUCTIONS: &str = "You are an Agent that repairs malformed JSON. Given any text that is meant \
to be JSON, respond with only the corrected, valid JSON: quote keys, remove trailing commas, balance \
brackets, and keep every value the input contained. Do not add commentary or Markdown fences.";

/// Turns almost-JSON into valid JSON. Only ever driven by the model.
#[derive(Debug, Default)]
pub struct CleanJsonAgent;

impl CleanJsonAgent {
    pub const NAME: &'static str = "Clean JSON";
}

impl AgentDefinition for CleanJsonAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> AgentKind {
        AgentKind::LlmAssisted
    }

    fn instructions(&self) -> String {
        with_base_instructions(INSTRUCTIONS)
    }

    fn initial_prompt(&self) -> String {
        "Reply with an empty JSON object until you are given JSON to clean.".to_string()
    }
}
