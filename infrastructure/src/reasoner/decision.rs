//! Raw decision parsing
//!
//! Reasoner backends emit free-form text that should contain one JSON tool
//! call. The parser tolerates fenced blocks and surrounding prose by slicing
//! the outermost braces; everything else is a malformed decision.

use relay_domain::tool::entities::ToolCall;

/// Parse one tool call out of a raw reasoner output.
///
/// Expected shape: `{"tool": "<name>", "args": {...}}`. Text before and
/// after the outermost JSON object is ignored.
pub fn parse_tool_call(raw: &str) -> Result<ToolCall, String> {
    let trimmed = raw.trim();

    let start = trimmed
        .find('{')
        .ok_or_else(|| format!("no JSON object in decision: {trimmed:?}"))?;
    let end = trimmed
        .rfind('}')
        .ok_or_else(|| format!("unterminated JSON object in decision: {trimmed:?}"))?;
    if end < start {
        return Err(format!("unterminated JSON object in decision: {trimmed:?}"));
    }

    let call: ToolCall = serde_json::from_str(&trimmed[start..=end])
        .map_err(|e| format!("invalid decision JSON: {e}"))?;

    if call.tool.is_empty() {
        return Err("decision does not name a tool".to_string());
    }
    Ok(call)
}
