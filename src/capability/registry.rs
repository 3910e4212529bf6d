//! Capability registry - resolves function calls to handlers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::Capability;
use crate::error::Error;
use crate::Result;

/// Tool definition for LLM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of the capabilities an agent exposes to the model
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Capability>,
}

impl CapabilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability, replacing any previous one with the same name
    pub fn register(&mut self, capability: Capability) {
        self.capabilities.insert(capability.name().to_string(), capability);
    }

    /// Register several capabilities at once
    pub fn extend(&mut self, capabilities: impl IntoIterator<Item = Capability>) {
        for capability in capabilities {
            self.register(capability);
        }
    }

    /// Get tool definitions for LLM, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.capabilities.values().map(Capability::to_definition).collect()
    }

    /// Resolve `name` and run its handler with `args`.
    ///
    /// Fails with [`Error::UnknownCapability`] if nothing is registered
    /// under that name.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<String> {
        let capability = self
            .capabilities
            .get(name)
            .ok_or_else(|| Error::UnknownCapability(name.to_string()))?;

        debug!("Dispatching {} with args: {}", name, args);
        capability.invoke(args).await
    }

    /// Check if a capability exists
    pub fn has(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// List registered capability names
    pub fn names(&self) -> Vec<&str> {
        self.capabilities.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl FromIterator<Capability> for CapabilityRegistry {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{string_arg, ParameterDefinition};
    use serde_json::json;

    fn greeting() -> Capability {
        Capability::provide(
            "greet",
            "Greets someone",
            vec![ParameterDefinition::string("who", "Who to greet")],
            |args| Ok(format!("Hello, {}!", string_arg(args, "who")?)),
        )
    }

    #[tokio::test]
    async fn test_dispatch_known_capability() {
        let mut registry = CapabilityRegistry::new();
        registry.register(greeting());

        assert!(registry.has("greet"));

        let result = registry.dispatch("greet", json!({"who": "Ada"})).await.unwrap();
        assert_eq!(result, "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_dispatch_async_capability() {
        let registry: CapabilityRegistry = vec![Capability::provide_async(
            "slow",
            "Waits before answering",
            vec![],
            |_args| async { Ok("awaited".to_string()) },
        )]
        .into_iter()
        .collect();

        let result = registry.dispatch("slow", json!({})).await.unwrap();
        assert_eq!(result, "awaited");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_capability() {
        let registry = CapabilityRegistry::new();
        let result = registry.dispatch("unknown", json!({})).await;
        assert!(matches!(result, Err(Error::UnknownCapability(name)) if name == "unknown"));
    }

    #[tokio::test]
    async fn test_handler_error_passes_through() {
        let mut registry = CapabilityRegistry::new();
        registry.register(greeting());

        let result = registry.dispatch("greet", json!({})).await;
        assert!(matches!(result, Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_definitions_sorted() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Capability::provide("b", "", vec![], |_| Ok(String::new())));
        registry.register(Capability::provide("a", "", vec![], |_| Ok(String::new())));

        let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
