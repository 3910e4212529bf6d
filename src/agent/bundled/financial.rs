use crate::agent::context::AgentContext;
use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::kind::AgentKind;
use crate::capability::{self, Capability};

const INSTRUCTIONS: &str = "You are an Agent that helps the User understand their personal finances. \
You can read local files and parse CSV exports of bank statements. Summarize spending by category, \
point out recurring charges and unusual transactions, and show the numbers you relied on. You do not \
give investment advice.";

/// Reads statements and summarizes spending.
#[derive(Debug, Default)]
pub struct FinancialAgent;

impl FinancialAgent {
    pub const NAME: &'static str = "Financial";
}

impl AgentDefinition for FinancialAgent {
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
        "Ask me which statement file I would like you to look at.".to_string()
    }

    fn capabilities(&self, ctx: &AgentContext) -> Vec<Capability> {
        vec![
            capability::io::read_file(ctx.file_root.clone()),
            capability::io::parse_csv(ctx.file_root.clone()),
        ]
    }
}
