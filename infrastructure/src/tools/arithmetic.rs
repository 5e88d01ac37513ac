//! Integer arithmetic tools
//!
//! All three take two integer operands and return an integer. Arithmetic
//! is checked: overflow becomes a handler fault, surfaced by the engine as
//! an execution error.

use relay_domain::tool::entities::{ArgType, ToolDefinition, ToolParameter};
use relay_domain::tool::traits::ArgMap;

pub const ADD_NUMBERS: &str = "add_numbers";
pub const SUBTRACT_NUMBERS: &str = "subtract_numbers";
pub const MULTIPLY_NUMBERS: &str = "multiply_numbers";

pub fn add_definition() -> ToolDefinition {
    ToolDefinition::new(ADD_NUMBERS, "Add two integers")
        .with_parameter(ToolParameter::new("a", "First operand", ArgType::Int))
        .with_parameter(ToolParameter::new("b", "Second operand", ArgType::Int))
}

pub fn subtract_definition() -> ToolDefinition {
    ToolDefinition::new(SUBTRACT_NUMBERS, "Subtract b from a")
        .with_parameter(ToolParameter::new("a", "Minuend", ArgType::Int))
        .with_parameter(ToolParameter::new("b", "Subtrahend", ArgType::Int))
}

pub fn multiply_definition() -> ToolDefinition {
    ToolDefinition::new(MULTIPLY_NUMBERS, "Multiply two integers")
        .with_parameter(ToolParameter::new("a", "First factor", ArgType::Int))
        .with_parameter(ToolParameter::new("b", "Second factor", ArgType::Int))
}

/// Read the two integer operands. Arguments are schema-validated before a
/// handler runs, so a failure here means the value does not fit in i64.
fn operands(args: &ArgMap) -> Result<(i64, i64), String> {
    let a = args
        .get("a")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "argument 'a' does not fit in a 64-bit integer".to_string())?;
    let b = args
        .get("b")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "argument 'b' does not fit in a 64-bit integer".to_string())?;
    Ok((a, b))
}

pub fn execute_add(args: &ArgMap) -> Result<serde_json::Value, String> {
    let (a, b) = operands(args)?;
    a.checked_add(b)
        .map(serde_json::Value::from)
        .ok_or_else(|| format!("integer overflow computing {a} + {b}"))
}

pub fn execute_subtract(args: &ArgMap) -> Result<serde_json::Value, String> {
    let (a, b) = operands(args)?;
    a.checked_sub(b)
        .map(serde_json::Value::from)
        .ok_or_else(|| format!("integer overflow computing {a} - {b}"))
}

pub fn execute_multiply(args: &ArgMap) -> Result<serde_json::Value, String> {
    let (a, b) = operands(args)?;
    a.checked_mul(b)
        .map(serde_json::Value::from)
        .ok_or_else(|| format!("integer overflow computing {a} * {b}"))
}
