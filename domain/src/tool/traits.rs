//! Tool domain traits
//!
//! Contains the pure validation logic and the execution-binding trait.
//! The async dispatch client port is defined in the application layer.

use std::collections::HashMap;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ValidationError;

/// Argument map passed to a handler after validation
pub type ArgMap = HashMap<String, serde_json::Value>;

/// Validator for tool calls
///
/// Pure domain trait: checks a call against a definition without any I/O
/// and without invoking the tool.
pub trait ToolValidator {
    /// Validate a tool call against its definition.
    ///
    /// Returns the first violation found, or `Ok(())` when the call's
    /// argument keys match the schema exactly and every value has the
    /// declared type.
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition)
    -> Result<(), ValidationError>;
}

/// Default implementation of [`ToolValidator`].
///
/// Checks run in a fixed phase order, each phase deterministic, stopping at
/// the first violation:
///
/// 1. missing arguments (schema declaration order)
/// 2. unexpected arguments (sorted argument names)
/// 3. type mismatches (schema declaration order)
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<(), ValidationError> {
        // Phase 1: every schema key must be present
        for param in &definition.parameters {
            if !call.args.contains_key(&param.name) {
                return Err(ValidationError::MissingArgument {
                    tool: definition.name.clone(),
                    key: param.name.clone(),
                });
            }
        }

        // Phase 2: no argument outside the schema. Sorted so the reported
        // key does not depend on map iteration order.
        let mut arg_names: Vec<&str> = call.args.keys().map(|k| k.as_str()).collect();
        arg_names.sort_unstable();
        for name in arg_names {
            if definition.parameter(name).is_none() {
                return Err(ValidationError::UnexpectedArgument {
                    tool: definition.name.clone(),
                    key: name.to_string(),
                });
            }
        }

        // Phase 3: every value must match its declared type
        for param in &definition.parameters {
            let value = &call.args[&param.name];
            if !param.param_type.matches(value) {
                return Err(ValidationError::TypeMismatch {
                    tool: definition.name.clone(),
                    key: param.name.clone(),
                    expected: param.param_type,
                    actual: value.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Execution binding for a tool.
///
/// Handlers are pure with respect to the dispatch machinery: they receive
/// already-validated arguments and return a value or a fault message. They
/// are held separately from [`ToolDefinition`] metadata so the discovery
/// view can never expose them. Implementations may still be effectful; the
/// engine invokes a handler at most once per attempt.
pub trait ToolHandler: Send + Sync {
    fn invoke(&self, args: &ArgMap) -> Result<serde_json::Value, String>;
}

impl<F> ToolHandler for F
where
    F: Fn(&ArgMap) -> Result<serde_json::Value, String> + Send + Sync,
{
    fn invoke(&self, args: &ArgMap) -> Result<serde_json::Value, String> {
        self(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ArgType, ToolParameter};
    use serde_json::json;

    fn add_definition() -> ToolDefinition {
        ToolDefinition::new("add_numbers", "Add two integers")
            .with_parameter(ToolParameter::new("a", "First operand", ArgType::Int))
            .with_parameter(ToolParameter::new("b", "Second operand", ArgType::Int))
    }

    #[test]
    fn test_valid_call_accepted() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers").with_arg("a", 7).with_arg("b", 12);

        assert!(validator.validate(&call, &add_definition()).is_ok());
    }

    #[test]
    fn test_missing_argument() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers").with_arg("a", 3);

        let err = validator.validate(&call, &add_definition()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingArgument {
                tool: "add_numbers".into(),
                key: "b".into(),
            }
        );
    }

    #[test]
    fn test_missing_reported_in_schema_order() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers");

        // Both are missing; the first declared parameter is reported
        let err = validator.validate(&call, &add_definition()).unwrap_err();
        assert_eq!(err.key(), "a");
    }

    #[test]
    fn test_unexpected_argument() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers")
            .with_arg("a", 1)
            .with_arg("b", 2)
            .with_arg("c", 3);

        let err = validator.validate(&call, &add_definition()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnexpectedArgument {
                tool: "add_numbers".into(),
                key: "c".into(),
            }
        );
    }

    #[test]
    fn test_missing_takes_precedence_over_unexpected() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers").with_arg("a", 1).with_arg("c", 3);

        // "b" is missing and "c" is extra; the missing check runs first
        let err = validator.validate(&call, &add_definition()).unwrap_err();
        assert_eq!(err.key(), "b");
    }

    #[test]
    fn test_type_mismatch() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers")
            .with_arg("a", "3")
            .with_arg("b", 12);

        let err = validator.validate(&call, &add_definition()).unwrap_err();
        match err {
            ValidationError::TypeMismatch {
                key,
                expected,
                actual,
                ..
            } => {
                assert_eq!(key, "a");
                assert_eq!(expected, ArgType::Int);
                assert_eq!(actual, "\"3\"");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_float_rejected_for_int() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers")
            .with_arg("a", 1.5)
            .with_arg("b", 2);

        let err = validator.validate(&call, &add_definition()).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_validation_has_no_side_effects() {
        // Validation never touches a handler; it only needs the definition.
        let validator = DefaultToolValidator;
        let call = ToolCall::new("add_numbers").with_arg("a", json!(null));
        let _ = validator.validate(&call, &add_definition());
    }

    #[test]
    fn test_closure_handler() {
        let handler = |args: &ArgMap| -> Result<serde_json::Value, String> {
            let a = args["a"].as_i64().ok_or("not an int")?;
            Ok(json!(a * 2))
        };

        let mut args = ArgMap::new();
        args.insert("a".into(), json!(21));
        assert_eq!(ToolHandler::invoke(&handler, &args).unwrap(), json!(42));
    }
}
