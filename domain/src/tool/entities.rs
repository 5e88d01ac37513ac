//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Primitive argument type declared by a tool schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// Integer (JSON number without a fractional part)
    Int,
    /// Floating-point number
    Float,
    /// String
    Str,
    /// Boolean
    Bool,
}

impl ArgType {
    pub fn as_str(&self) -> &str {
        match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Str => "str",
            ArgType::Bool => "bool",
        }
    }

    /// Check whether a runtime JSON value matches this declared type.
    ///
    /// A number only matches `Int` when it is an integer; any JSON number
    /// matches `Float`.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            ArgType::Int => value.as_i64().is_some() || value.as_u64().is_some(),
            ArgType::Float => value.is_number(),
            ArgType::Str => value.is_string(),
            ArgType::Bool => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for a tool
///
/// Every declared parameter is required: a call is valid only when its
/// argument keys match the schema's key set exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Declared primitive type
    pub param_type: ArgType,
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, param_type: ArgType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
        }
    }
}

/// Definition of a tool that can be dispatched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "add_numbers")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Argument schema, in declaration order
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Look up a declared parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Registry of available tool definitions.
///
/// Built once at startup via [`register`](Self::register) and never mutated
/// afterwards. Both discovery output and validation derive from this same
/// instance, so the two can never diverge.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    /// Get a tool definition by exact name. No partial or case-insensitive
    /// matching.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub args: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            args: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Get an i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.args.get(key).and_then(|v| v.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arg_type_matches() {
        assert!(ArgType::Int.matches(&json!(42)));
        assert!(ArgType::Int.matches(&json!(-3)));
        assert!(!ArgType::Int.matches(&json!(1.5)));
        assert!(!ArgType::Int.matches(&json!("42")));

        assert!(ArgType::Float.matches(&json!(1.5)));
        assert!(ArgType::Float.matches(&json!(3)));

        assert!(ArgType::Str.matches(&json!("hello")));
        assert!(!ArgType::Str.matches(&json!(true)));

        assert!(ArgType::Bool.matches(&json!(false)));
        assert!(!ArgType::Bool.matches(&json!(0)));
    }

    #[test]
    fn test_arg_type_wire_name() {
        assert_eq!(serde_json::to_string(&ArgType::Int).unwrap(), "\"int\"");
        let parsed: ArgType = serde_json::from_str("\"str\"").unwrap();
        assert_eq!(parsed, ArgType::Str);
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("add_numbers", "Add two integers")
            .with_parameter(ToolParameter::new("a", "First operand", ArgType::Int))
            .with_parameter(ToolParameter::new("b", "Second operand", ArgType::Int));

        assert_eq!(tool.name, "add_numbers");
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.parameter("a").unwrap().param_type, ArgType::Int);
        assert!(tool.parameter("c").is_none());
    }

    #[test]
    fn test_tool_spec_exact_match_only() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("add_numbers", "Add two integers"))
            .register(ToolDefinition::new("multiply_numbers", "Multiply two integers"));

        assert!(spec.get("add_numbers").is_some());
        assert!(spec.get("Add_Numbers").is_none());
        assert!(spec.get("add").is_none());
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_tool_call_builder() {
        let call = ToolCall::new("add_numbers").with_arg("a", 3).with_arg("b", 5);

        assert_eq!(call.tool, "add_numbers");
        assert_eq!(call.get_i64("a"), Some(3));
        assert_eq!(call.get_i64("b"), Some(5));
        assert!(call.get_i64("c").is_none());
    }

    #[test]
    fn test_tool_call_serde_round_trip() {
        let call = ToolCall::new("subtract_numbers")
            .with_arg("a", 10)
            .with_arg("b", 4);

        let json = serde_json::to_string(&call).unwrap();
        let parsed: ToolCall = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, call);
    }
}
