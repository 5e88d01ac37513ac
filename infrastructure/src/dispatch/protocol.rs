//! Wire protocol for the dispatch boundary
//!
//! Serde shapes shared by every transport in front of the engine. The
//! discovery body is built from [`ToolSpec`] metadata alone, so handler
//! bindings cannot cross the boundary by construction.

use relay_domain::tool::entities::{ArgType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
use relay_domain::tool::value_objects::{DispatchError, ErrorCategory, ToolResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Public shape of one tool: description plus argument schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub description: String,
    pub input_schema: BTreeMap<String, ArgType>,
}

/// Response body for the discovery request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub tools: BTreeMap<String, ToolInfo>,
}

impl DiscoveryResponse {
    /// Build the discovery body from the registry metadata
    pub fn from_spec(spec: &ToolSpec) -> Self {
        let tools = spec
            .all()
            .map(|def| {
                let input_schema = def
                    .parameters
                    .iter()
                    .map(|p| (p.name.clone(), p.param_type))
                    .collect();
                (
                    def.name.clone(),
                    ToolInfo {
                        description: def.description.clone(),
                        input_schema,
                    },
                )
            })
            .collect();
        Self { tools }
    }

    /// Reconstruct tool definitions on the consuming side. Parameter
    /// descriptions do not travel over the wire; the schema does.
    pub fn into_definitions(self) -> Vec<ToolDefinition> {
        self.tools
            .into_iter()
            .map(|(name, info)| {
                let mut def = ToolDefinition::new(name, info.description);
                for (param, ty) in info.input_schema {
                    def = def.with_parameter(ToolParameter::new(param, "", ty));
                }
                def
            })
            .collect()
    }
}

/// Request body for the invoke request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub tool: String,
    pub args: HashMap<String, serde_json::Value>,
}

impl From<&ToolCall> for InvokeRequest {
    fn from(call: &ToolCall) -> Self {
        Self {
            tool: call.tool.clone(),
            args: call.args.clone(),
        }
    }
}

impl InvokeRequest {
    pub fn into_call(self) -> ToolCall {
        ToolCall {
            tool: self.tool,
            args: self.args,
        }
    }
}

/// Structured error body for a failed invoke
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub category: ErrorCategory,
    pub message: String,
}

/// Response body for the invoke request: a result value or a categorized
/// error, never both
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvokeResponse {
    Result { result: serde_json::Value },
    Error { error: ErrorBody },
}

impl InvokeResponse {
    pub fn from_result(result: &ToolResult) -> Self {
        match (result.output(), result.error()) {
            (Some(value), _) if result.is_success() => Self::Result {
                result: value.clone(),
            },
            (_, Some(err)) => Self::Error {
                error: ErrorBody {
                    category: err.category,
                    message: err.message.clone(),
                },
            },
            _ => Self::Error {
                error: ErrorBody {
                    category: ErrorCategory::ExecutionError,
                    message: "dispatch produced no output and no error".to_string(),
                },
            },
        }
    }

    /// Fold a response back into a per-attempt outcome
    pub fn into_result(self, tool: &str) -> ToolResult {
        match self {
            Self::Result { result } => ToolResult::success(tool, result),
            Self::Error { error } => ToolResult::failure(
                tool,
                DispatchError::new(error.category, error.message),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_tool_spec;
    use serde_json::json;

    #[test]
    fn test_discovery_from_spec() {
        let body = DiscoveryResponse::from_spec(&default_tool_spec());

        assert_eq!(body.tools.len(), 3);
        let add = &body.tools["add_numbers"];
        assert_eq!(add.description, "Add two integers");
        assert_eq!(add.input_schema["a"], ArgType::Int);
        assert_eq!(add.input_schema["b"], ArgType::Int);
    }

    #[test]
    fn test_discovery_wire_shape() {
        let body = DiscoveryResponse::from_spec(&default_tool_spec());
        let wire = serde_json::to_value(&body).unwrap();

        // The original boundary shape: name -> {description, input_schema}
        assert_eq!(
            wire["tools"]["add_numbers"]["input_schema"],
            json!({"a": "int", "b": "int"})
        );
        // Nothing but description and schema is exposed
        let keys: Vec<&String> = wire["tools"]["add_numbers"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["description", "input_schema"]);
    }

    #[test]
    fn test_discovery_round_trip_preserves_schema() {
        let body = DiscoveryResponse::from_spec(&default_tool_spec());
        let wire = serde_json::to_string(&body).unwrap();
        let parsed: DiscoveryResponse = serde_json::from_str(&wire).unwrap();

        let defs = parsed.into_definitions();
        assert_eq!(defs.len(), 3);
        let add = defs.iter().find(|d| d.name == "add_numbers").unwrap();
        assert_eq!(add.parameter("a").unwrap().param_type, ArgType::Int);
    }

    #[test]
    fn test_invoke_request_round_trip() {
        let call = ToolCall::new("add_numbers").with_arg("a", 3).with_arg("b", 5);
        let request = InvokeRequest::from(&call);
        let wire = serde_json::to_string(&request).unwrap();
        let parsed: InvokeRequest = serde_json::from_str(&wire).unwrap();

        assert_eq!(parsed.into_call(), call);
    }

    #[test]
    fn test_invoke_response_success() {
        let result = ToolResult::success("add_numbers", json!(19));
        let response = InvokeResponse::from_result(&result);
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire, json!({"result": 19}));

        let parsed: InvokeResponse = serde_json::from_value(wire).unwrap();
        let folded = parsed.into_result("add_numbers");
        assert!(folded.is_success());
        assert_eq!(folded.output(), Some(&json!(19)));
    }

    #[test]
    fn test_invoke_response_error() {
        let result = ToolResult::failure("nope", DispatchError::unknown_tool("nope"));
        let response = InvokeResponse::from_result(&result);
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["error"]["category"], "unknown_tool");

        let parsed: InvokeResponse = serde_json::from_value(wire).unwrap();
        let folded = parsed.into_result("nope");
        assert_eq!(
            folded.error().unwrap().category,
            ErrorCategory::UnknownTool
        );
    }
}
