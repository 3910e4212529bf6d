//! Agent inputs - named arguments supplied before an agent's first use

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// A named argument an agent needs before it can start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentInput {
    StringArg { key: String, value: String },
    ListArg { key: String, values: Vec<String> },
}

impl AgentInput {
    /// Empty string argument
    pub fn string(key: impl Into<String>) -> Self {
        AgentInput::StringArg {
            key: key.into(),
            value: String::new(),
        }
    }

    /// Empty list argument
    pub fn list(key: impl Into<String>) -> Self {
        AgentInput::ListArg {
            key: key.into(),
            values: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            AgentInput::StringArg { key, .. } | AgentInput::ListArg { key, .. } => key,
        }
    }

    /// Type name shown in agent signatures
    pub fn type_name(&self) -> &'static str {
        match self {
            AgentInput::StringArg { .. } => "String",
            AgentInput::ListArg { .. } => "List<String>",
        }
    }

    /// Same argument carrying a raw value; list arguments split it on `,`
    pub fn with_raw_value(&self, raw: &str) -> Self {
        match self {
            AgentInput::StringArg { key, .. } => AgentInput::StringArg {
                key: key.clone(),
                value: raw.to_string(),
            },
            AgentInput::ListArg { key, .. } => AgentInput::ListArg {
                key: key.clone(),
                values: raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

/// Render `Name(key: String, other: List<String>)`
pub fn signature(name: &str, inputs: &[AgentInput]) -> String {
    let args: Vec<String> = inputs
        .iter()
        .map(|input| format!("{}: {}", input.key(), input.type_name()))
        .collect();
    format!("{}({})", name, args.join(", "))
}

/// Inputs supplied by the caller, keyed by input key.
///
/// Lookups are lenient: a missing input reads as an empty string or an
/// empty list, never as an error.
#[derive(Debug, Clone, Default)]
pub struct AgentInputs {
    inputs: HashMap<String, AgentInput>,
}

impl AgentInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, input: AgentInput) {
        self.inputs.insert(input.key().to_string(), input);
    }

    pub fn get(&self, key: &str) -> Option<&AgentInput> {
        self.inputs.get(key)
    }

    /// String value of `key`, or `""` when it was not supplied
    pub fn string(&self, key: &str) -> String {
        match self.inputs.get(key) {
            Some(AgentInput::StringArg { value, .. }) => value.clone(),
            Some(AgentInput::ListArg { values, .. }) => values.join(", "),
            None => String::new(),
        }
    }

    /// List value of `key`, or an empty list when it was not supplied
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.inputs.get(key) {
            Some(AgentInput::ListArg { values, .. }) => values.clone(),
            Some(AgentInput::StringArg { value, .. }) if !value.is_empty() => vec![value.clone()],
            _ => Vec::new(),
        }
    }

    /// Build inputs from `key=value` pairs, typed by the agent's needed inputs.
    ///
    /// Keys the agent does not declare are rejected. Declared keys that are
    /// not given stay absent and read as empty.
    pub fn from_pairs<S: AsRef<str>>(needed: &[AgentInput], pairs: &[S]) -> Result<Self> {
        let mut inputs = Self::new();

        for pair in pairs {
            let pair = pair.as_ref();
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| Error::InvalidArguments(format!("Expected KEY=VALUE, got '{}'", pair)))?;

            let declared = needed
                .iter()
                .find(|input| input.key() == key.trim())
                .ok_or_else(|| Error::InvalidArguments(format!("Unknown input '{}'", key.trim())))?;

            inputs.insert(declared.with_raw_value(raw.trim()));
        }

        Ok(inputs)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl FromIterator<AgentInput> for AgentInputs {
    fn from_iter<I: IntoIterator<Item = AgentInput>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for input in iter {
            inputs.insert(input);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_reads_empty() {
        let inputs = AgentInputs::new();
        assert_eq!(inputs.string("Agent Description"), "");
        assert!(inputs.list("Technologies").is_empty());
    }

    #[test]
    fn test_signature() {
        let inputs = vec![AgentInput::string("File Path"), AgentInput::list("Technologies")];
        assert_eq!(
            signature("Write Code", &inputs),
            "Write Code(File Path: String, Technologies: List<String>)"
        );
        assert_eq!(signature("Clean JSON", &[]), "Clean JSON()");
    }

    #[test]
    fn test_from_pairs_types_values() {
        let needed = vec![AgentInput::string("Description"), AgentInput::list("Technologies")];
        let inputs =
            AgentInputs::from_pairs(&needed, &["Description=a todo app", "Technologies=rust, sqlite"])
                .unwrap();

        assert_eq!(inputs.string("Description"), "a todo app");
        assert_eq!(inputs.list("Technologies"), vec!["rust", "sqlite"]);
    }

    #[test]
    fn test_from_pairs_rejects_unknown_key() {
        let needed = vec![AgentInput::string("Description")];
        assert!(AgentInputs::from_pairs(&needed, &["Colour=blue"]).is_err());
        assert!(AgentInputs::from_pairs(&needed, &["no equals sign"]).is_err());
    }
}
