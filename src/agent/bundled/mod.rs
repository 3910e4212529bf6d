//! Bundled agents
//!
//! Each agent is a small [`AgentDefinition`](super::AgentDefinition):
//! instructions, an initial prompt, optional inputs and the capabilities
//! it may call.

mod clean_json;
mod create_agent;
mod define_agent;
mod delegate_tasks;
mod financial;
mod local_capabilities;
mod modify_file;
mod write_code;

pub use clean_json::CleanJsonAgent;
pub use create_agent::CreateAgentAgent;
pub use define_agent::DefineAgentAgent;
pub use delegate_tasks::DelegateTasksAgent;
pub use financial::FinancialAgent;
pub use local_capabilities::LocalCapabilitiesAgent;
pub use modify_file::ModifyFileAgent;
pub use write_code::WriteCodeAgent;

use super::registry::AgentRegistry;

/// Registry holding every bundled agent
pub fn registry() -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    registry.register(CleanJsonAgent::default);
    registry.register(DefineAgentAgent::default);
    registry.register(DelegateTasksAgent::default);
    registry.register(FinancialAgent::default);
    registry.register(LocalCapabilitiesAgent::default);
    registry.register(ModifyFileAgent::default);
    registry.register(WriteCodeAgent::default);
    registry.register_user_only(CreateAgentAgent::default);
    registry
}
