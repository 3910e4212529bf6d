use crate::agent::context::AgentContext;
use crate::agent::definition::{with_base_instructions, AgentDefinition};
use crate::agent::kind::AgentKind;
use crate::capability::{self, Capability};

const INSTRUCTIONS: &str = "You are an Agent that breaks a request into tasks and delegates each task \
to the most suitable LLM Agent. Use getAgents or getAgentArgs to learn which Agents exist, then call \
promptAgent once per task with a self-contained prompt. Combine the Agents' answers into one reply and \
say which Agent produced each part.";

/// Splits work across the other registered agents.
#[derive(Debug, Default)]
pub struct DelegateTasksAgent;

impl DelegateTasksAgent {
    pub const NAME: &'static str = "Delegate Tasks";
}

impl AgentDefinition for DelegateTasksAgent {
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
        "List the Agents you can delegate to and ask me what I need done.".to_string()
    }

    fn capabilities(&self, ctx: &AgentContext) -> Vec<Capability> {
        capability::agent::all(ctx)
    }
}
