//! Shared context handed to every agent of a session.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::Result;

use super::llm::LlmClient;
use super::loop_impl::Agent;
use super::registry::AgentRegistry;

/// Everything an agent needs beyond its own definition: the model
/// client, the registry of other agents, and run limits.
///
/// Cheap to clone; capabilities keep their own copy.
#[derive(Clone)]
pub struct AgentContext {
    pub client: Arc<dyn LlmClient>,
    pub agents: Arc<AgentRegistry>,
    pub model: String,
    pub max_iterations: usize,
    pub file_root: Arc<PathBuf>,
}

impl AgentContext {
    /// Create a context from configuration.
    pub fn new(config: &Config, client: Arc<dyn LlmClient>, agents: Arc<AgentRegistry>) -> Self {
        Self {
            client,
            agents,
            model: config.model.clone(),
            max_iterations: config.max_iterations,
            file_root: Arc::new(config.file_root.clone()),
        }
    }

    /// Instantiate a registered agent by name.
    pub fn create_agent(&self, name: &str) -> Result<Agent> {
        let definition = self.agents.create(name)?;
        Ok(Agent::new(definition, self.clone()))
    }

    /// Instantiate an agent another agent asked for; user-only agents are refused.
    pub fn create_delegate(&self, name: &str) -> Result<Agent> {
        let definition = self.agents.create_delegate(name)?;
        Ok(Agent::new(definition, self.clone()))
    }

    /// Create a test context around a client, with the bundled agents.
    #[cfg(test)]
    pub fn test(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            agents: Arc::new(super::bundled::registry()),
            model: "fake-model".to_string(),
            max_iterations: 10,
            file_root: Arc::new(std::env::temp_dir()),
        }
    }
}
