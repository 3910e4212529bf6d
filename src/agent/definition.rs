//! Agent definitions - the per-agent behaviour behind a conversation

use crate::capability::Capability;

use super::context::AgentContext;
use super::input::{AgentInput, AgentInputs};
use super::kind::AgentKind;

/// Instructions every agent starts from.
pub const BASE_INSTRUCTIONS: &str = "You are a helpful assistant. Answer accurately and concisely. \
When a function is available that can answer part of the request, call it instead of guessing, \
and tell the User what the function did.";

/// Base instructions followed by agent specific ones.
pub fn with_base_instructions(specific: &str) -> String {
    format!("{}\n\n{}", BASE_INSTRUCTIONS, specific)
}

/// Definition trait - implemented by every bundled agent
pub trait AgentDefinition: Send + Sync {
    /// Display name, also the key in the agent registry
    fn name(&self) -> &str;

    /// Who may produce turns for this agent
    fn kind(&self) -> AgentKind;

    /// System instructions
    fn instructions(&self) -> String {
        BASE_INSTRUCTIONS.to_string()
    }

    /// First user message when the agent is started without one
    fn initial_prompt(&self) -> String;

    /// Inputs the caller should supply before first use
    fn needed_inputs(&self) -> Vec<AgentInput> {
        Vec::new()
    }

    /// Take supplied inputs. Missing ones read as empty.
    fn parse_needed_inputs(&mut self, _inputs: &AgentInputs) {}

    /// Capabilities this agent exposes to the model
    fn capabilities(&self, _ctx: &AgentContext) -> Vec<Capability> {
        Vec::new()
    }
}
