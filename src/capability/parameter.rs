//! Parameter definitions and JSON schema rendering

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A single named parameter of a capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    pub is_required: bool,
    /// JSON schema fragment for this parameter (`type`, `description`, ...)
    pub definition: Value,
}

impl ParameterDefinition {
    /// Required string parameter
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_required: true,
            definition: json!({
                "type": "string",
                "description": description.into(),
            }),
        }
    }

    /// Mark this parameter as optional
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }
}

/// Render a parameter list into an object schema
pub fn to_schema(parameters: &[ParameterDefinition]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in parameters {
        properties.insert(param.name.clone(), param.definition.clone());
        if param.is_required {
            required.push(Value::String(param.name.clone()));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_required_only() {
        let params = vec![
            ParameterDefinition::string("agent", "Agent name"),
            ParameterDefinition::string("note", "Free text").optional(),
        ];

        let schema = to_schema(&params);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["agent"]["type"], "string");
        assert_eq!(schema["properties"]["note"]["description"], "Free text");
        assert_eq!(schema["required"], json!(["agent"]));
    }

    #[test]
    fn test_empty_schema() {
        let schema = to_schema(&[]);
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }
}
