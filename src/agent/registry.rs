//! Agent registry - the agents a session can start or delegate to

use crate::error::Error;
use crate::Result;

use super::definition::AgentDefinition;
use super::input::{signature, AgentInput};

type Factory = Box<dyn Fn() -> Box<dyn AgentDefinition> + Send + Sync>;

struct Entry {
    name: String,
    needed_inputs: Vec<AgentInput>,
    delegable: bool,
    factory: Factory,
}

/// Registry of agent definitions, kept in registration order.
///
/// Passed around by reference (`Arc`) so capabilities that list or
/// prompt other agents see the same set the session was built with.
/// Only delegable entries are visible to those capabilities.
#[derive(Default)]
pub struct AgentRegistry {
    entries: Vec<Entry>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. A later registration under the same name replaces the earlier one.
    pub fn register<F, D>(&mut self, factory: F)
    where
        F: Fn() -> D + Send + Sync + 'static,
        D: AgentDefinition + 'static,
    {
        self.insert(factory, true);
    }

    /// Register an agent users can start but other agents cannot prompt
    pub fn register_user_only<F, D>(&mut self, factory: F)
    where
        F: Fn() -> D + Send + Sync + 'static,
        D: AgentDefinition + 'static,
    {
        self.insert(factory, false);
    }

    fn insert<F, D>(&mut self, factory: F, delegable: bool)
    where
        F: Fn() -> D + Send + Sync + 'static,
        D: AgentDefinition + 'static,
    {
        let sample = factory();
        let name = sample.name().to_string();
        let needed_inputs = sample.needed_inputs();

        self.entries.retain(|e| e.name != name);
        self.entries.push(Entry {
            name,
            needed_inputs,
            delegable,
            factory: Box::new(move || -> Box<dyn AgentDefinition> { Box::new(factory()) }),
        });
    }

    /// Create a fresh definition for `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn AgentDefinition>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| Error::UnknownAgent(name.to_string()))
    }

    /// Create a fresh definition for `name` if other agents may prompt it
    pub fn create_delegate(&self, name: &str) -> Result<Box<dyn AgentDefinition>> {
        self.entries
            .iter()
            .find(|e| e.delegable && e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| Error::UnknownAgent(name.to_string()))
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Names other agents may prompt
    pub fn delegate_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.delegable)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Inputs the named agent needs, if registered
    pub fn needed_inputs(&self, name: &str) -> Option<&[AgentInput]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.needed_inputs.as_slice())
    }

    /// `Name(key: Type, ...)` for every registered agent
    pub fn signatures(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| signature(&e.name, &e.needed_inputs))
            .collect()
    }

    /// Signatures of the agents other agents may prompt
    pub fn delegate_signatures(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.delegable)
            .map(|e| signature(&e.name, &e.needed_inputs))
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::kind::AgentKind;

    struct Named(&'static str, Vec<AgentInput>);

    impl AgentDefinition for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn kind(&self) -> AgentKind {
            AgentKind::LlmAssisted
        }
        fn initial_prompt(&self) -> String {
            String::new()
        }
        fn needed_inputs(&self) -> Vec<AgentInput> {
            self.1.clone()
        }
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = AgentRegistry::new();
        registry.register(|| Named("Alpha", vec![]));
        registry.register(|| Named("Beta", vec![AgentInput::list("Tags")]));

        assert_eq!(registry.names(), vec!["Alpha", "Beta"]);
        assert_eq!(registry.signatures(), vec!["Alpha()", "Beta(Tags: List<String>)"]);
        assert_eq!(registry.create("Beta").unwrap().name(), "Beta");
        assert_eq!(registry.needed_inputs("Beta").map(|i| i.len()), Some(1));
    }

    #[test]
    fn test_unknown_agent() {
        let registry = AgentRegistry::new();
        assert!(matches!(registry.create("Ghost"), Err(Error::UnknownAgent(name)) if name == "Ghost"));
    }

    #[test]
    fn test_user_only_hidden_from_delegation() {
        let mut registry = AgentRegistry::new();
        registry.register(|| Named("Alpha", vec![]));
        registry.register_user_only(|| Named("Maker", vec![]));

        assert_eq!(registry.names(), vec!["Alpha", "Maker"]);
        assert_eq!(registry.delegate_names(), vec!["Alpha"]);
        assert_eq!(registry.delegate_signatures(), vec!["Alpha()"]);
        assert!(registry.create("Maker").is_ok());
        assert!(matches!(registry.create_delegate("Maker"), Err(Error::UnknownAgent(_))));
        assert_eq!(registry.create_delegate("Alpha").unwrap().name(), "Alpha");
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = AgentRegistry::new();
        registry.register(|| Named("Alpha", vec![]));
        registry.register(|| Named("Alpha", vec![AgentInput::string("Goal")]));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.signatures(), vec!["Alpha(Goal: String)"]);
    }
}
