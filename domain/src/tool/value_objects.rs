//! Tool domain value objects: dispatch outcomes and the error taxonomy
//!
//! Every dispatch attempt produces a [`ToolResult`]: a success value or a
//! [`DispatchError`] with a category and a human-readable message. The
//! categories drive the agent loop's retry decision: everything except
//! `Unauthorized` is recoverable via the reflection step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::ArgType;

/// Validation failure for one tool call.
///
/// Only the first violation found is reported; its message carries the
/// offending key and the expected/actual types so a corrective re-decision
/// has something concrete to act on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required argument '{key}' for tool '{tool}'")]
    MissingArgument { tool: String, key: String },

    #[error("unexpected argument '{key}' for tool '{tool}'")]
    UnexpectedArgument { tool: String, key: String },

    #[error(
        "type mismatch for argument '{key}' of tool '{tool}': expected {expected}, got {actual}"
    )]
    TypeMismatch {
        tool: String,
        key: String,
        expected: ArgType,
        actual: String,
    },
}

impl ValidationError {
    /// The argument name this violation is about
    pub fn key(&self) -> &str {
        match self {
            ValidationError::MissingArgument { key, .. }
            | ValidationError::UnexpectedArgument { key, .. }
            | ValidationError::TypeMismatch { key, .. } => key,
        }
    }
}

/// Category of a dispatch failure, as surfaced across the invoke boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// No tool registered under the requested name
    UnknownTool,
    /// Arguments rejected by schema validation; the tool was not invoked
    InvalidArguments,
    /// The tool was invoked and failed at runtime
    ExecutionError,
    /// Rejected by the auth gate before reaching the engine
    Unauthorized,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCategory::UnknownTool => "unknown_tool",
            ErrorCategory::InvalidArguments => "invalid_arguments",
            ErrorCategory::ExecutionError => "execution_error",
            ErrorCategory::Unauthorized => "unauthorized",
        }
    }

    /// Whether a failure of this category can be fixed by a corrected call.
    ///
    /// A missing credential cannot; everything else is local to one attempt.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorCategory::Unauthorized)
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error surfaced by the dispatch boundary for one failed attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchError {
    /// Failure category
    pub category: ErrorCategory,
    /// Human-readable message with enough detail for self-correction
    pub message: String,
}

impl DispatchError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::UnknownTool,
            format!("tool not found: {}", name.into()),
        )
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::ExecutionError, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(
            ErrorCategory::Unauthorized,
            "invalid or missing credential",
        )
    }

    pub fn is_retryable(&self) -> bool {
        self.category.is_retryable()
    }
}

impl From<ValidationError> for DispatchError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCategory::InvalidArguments, err.to_string())
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

impl std::error::Error for DispatchError {}

/// Outcome of a single dispatch attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was dispatched
    pub tool: String,
    /// Whether the attempt succeeded
    pub success: bool,
    /// Return value (for successful dispatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Error information (for failed dispatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DispatchError>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            tool: tool.into(),
            success: true,
            output: Some(output),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool: impl Into<String>, error: DispatchError) -> Self {
        Self {
            tool: tool.into(),
            success: false,
            output: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&serde_json::Value> {
        self.output.as_ref()
    }

    pub fn error(&self) -> Option<&DispatchError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingArgument {
            tool: "add_numbers".into(),
            key: "b".into(),
        };
        assert_eq!(err.key(), "b");
        assert!(err.to_string().contains("missing required argument 'b'"));

        let err = ValidationError::TypeMismatch {
            tool: "add_numbers".into(),
            key: "a".into(),
            expected: ArgType::Int,
            actual: "\"3\"".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected int"));
        assert!(msg.contains("\"3\""));
    }

    #[test]
    fn test_error_category_retryable() {
        assert!(ErrorCategory::UnknownTool.is_retryable());
        assert!(ErrorCategory::InvalidArguments.is_retryable());
        assert!(ErrorCategory::ExecutionError.is_retryable());
        assert!(!ErrorCategory::Unauthorized.is_retryable());

        // The agent loop's fatality check goes through the error itself
        assert!(DispatchError::unknown_tool("nope").is_retryable());
        assert!(!DispatchError::unauthorized().is_retryable());
    }

    #[test]
    fn test_validation_error_into_dispatch_error() {
        let err: DispatchError = ValidationError::UnexpectedArgument {
            tool: "add_numbers".into(),
            key: "c".into(),
        }
        .into();

        assert_eq!(err.category, ErrorCategory::InvalidArguments);
        assert!(err.message.contains("'c'"));
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("add_numbers", json!(19));
        assert!(result.is_success());
        assert_eq!(result.output(), Some(&json!(19)));
        assert!(result.error().is_none());
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure("nope", DispatchError::unknown_tool("nope"));
        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().category, ErrorCategory::UnknownTool);
    }

    #[test]
    fn test_error_category_wire_name() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::InvalidArguments).unwrap(),
            "\"invalid_arguments\""
        );
    }
}
