//! Tool definition types shared across the tools domain.
//!
//! These structs mirror the wire shapes consumed by the dashboard frontend,
//! so serialization uses camelCase field names throughout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of a tool parameter.
///
/// Parameter bags arrive as free-form JSON; this enum is what supplied
/// values are validated against before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParameterType {
    /// Check whether a JSON value is of this declared type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }

    /// Human-readable name used in validation error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// A single declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolParameter {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ParameterType,

    pub description: String,

    pub required: bool,

    /// Optional default value, surfaced to clients as an input hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ToolParameter {
    /// Create a parameter with no default value.
    pub fn new(
        name: impl Into<String>,
        kind: ParameterType,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required,
            default: None,
        }
    }
}

/// A callable tool exposed by a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ToolParameter>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_type_matches() {
        assert!(ParameterType::String.matches(&json!("hello")));
        assert!(ParameterType::Number.matches(&json!(4.2)));
        assert!(ParameterType::Boolean.matches(&json!(true)));
        assert!(ParameterType::Object.matches(&json!({"a": 1})));
        assert!(ParameterType::Array.matches(&json!([1, 2])));
        assert!(!ParameterType::Number.matches(&json!("4.2")));
        assert!(!ParameterType::String.matches(&json!(null)));
    }

    #[test]
    fn test_parameter_serializes_camel_case() {
        let param = ToolParameter::new("input", ParameterType::String, "Input parameter", true);
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["type"], "string");
        assert_eq!(value["required"], true);
        assert!(value.get("default").is_none());
    }

    #[test]
    fn test_definition_round_trips() {
        let def = ToolDefinition::new(
            "echo",
            "Echo a value",
            vec![ToolParameter::new(
                "value",
                ParameterType::Object,
                "Value to echo",
                false,
            )],
        );
        let json = serde_json::to_string(&def).unwrap();
        let back: ToolDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
