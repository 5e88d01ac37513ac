//! Keyword reasoner
//!
//! A deterministic stand-in for a model-backed reasoner: picks the tool by
//! keyword, pulls integer operands out of the request text, and repairs its
//! previous call from the failure message during reflection.

use crate::tools::arithmetic;
use async_trait::async_trait;
use relay_application::ports::reasoner::{Reasoner, ReasonerError};
use relay_domain::tool::entities::{ToolCall, ToolDefinition};
use tracing::debug;

const KEYWORDS: &[(&str, &str)] = &[
    ("add", arithmetic::ADD_NUMBERS),
    ("plus", arithmetic::ADD_NUMBERS),
    ("sum", arithmetic::ADD_NUMBERS),
    ("subtract", arithmetic::SUBTRACT_NUMBERS),
    ("minus", arithmetic::SUBTRACT_NUMBERS),
    ("difference", arithmetic::SUBTRACT_NUMBERS),
    ("multiply", arithmetic::MULTIPLY_NUMBERS),
    ("times", arithmetic::MULTIPLY_NUMBERS),
    ("product", arithmetic::MULTIPLY_NUMBERS),
];

/// Pull every integer literal out of the text, in order
fn extract_integers(text: &str) -> Vec<i64> {
    let mut nums = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            current.push(c);
            continue;
        }
        if let Ok(n) = current.parse::<i64>() {
            nums.push(n);
        }
        current.clear();
        if c == '-' {
            current.push('-');
        }
    }
    if let Ok(n) = current.parse::<i64>() {
        nums.push(n);
    }
    nums
}

/// The argument key a validator message complains about, if any
fn quoted_key(message: &str) -> Option<&str> {
    let start = message.find('\'')? + 1;
    let end = start + message[start..].find('\'')?;
    Some(&message[start..end])
}

#[derive(Debug, Default)]
pub struct KeywordReasoner;

impl KeywordReasoner {
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh call from the request text alone
    fn choose(
        &self,
        tools: &[ToolDefinition],
        request: &str,
    ) -> Result<ToolCall, ReasonerError> {
        let lowered = request.to_lowercase();
        let tool = KEYWORDS
            .iter()
            .find(|(keyword, name)| {
                lowered.contains(keyword) && tools.iter().any(|t| t.name == *name)
            })
            .map(|(_, name)| *name)
            .ok_or_else(|| {
                ReasonerError::MalformedDecision(format!(
                    "no available tool matches request: {request}"
                ))
            })?;

        let definition = tools
            .iter()
            .find(|t| t.name == tool)
            .ok_or_else(|| ReasonerError::MalformedDecision(format!("tool vanished: {tool}")))?;

        let mut nums = extract_integers(request);
        // "subtract X from Y" names the subtrahend first
        if tool == arithmetic::SUBTRACT_NUMBERS && lowered.contains(" from ") && nums.len() >= 2 {
            nums.swap(0, 1);
        }

        let mut call = ToolCall::new(tool);
        for (param, value) in definition.parameters.iter().zip(nums) {
            call = call.with_arg(&param.name, value);
        }
        debug!(tool = %call.tool, "keyword reasoner selected a call");
        Ok(call)
    }
}

#[async_trait]
impl Reasoner for KeywordReasoner {
    async fn decide(
        &self,
        tools: &[ToolDefinition],
        request: &str,
    ) -> Result<ToolCall, ReasonerError> {
        self.choose(tools, request)
    }

    async fn reflect(
        &self,
        tools: &[ToolDefinition],
        request: &str,
        prev_call: Option<&ToolCall>,
        error_message: &str,
    ) -> Result<ToolCall, ReasonerError> {
        debug!(error = %error_message, "keyword reasoner reflecting");

        let Some(prev) = prev_call else {
            return self.choose(tools, request);
        };
        if error_message.contains("tool not found") {
            return self.choose(tools, request);
        }

        if error_message.contains("unexpected argument") {
            if let Some(key) = quoted_key(error_message) {
                let mut call = prev.clone();
                call.args.remove(key);
                return Ok(call);
            }
        }

        if error_message.contains("type mismatch") {
            if let Some(key) = quoted_key(error_message) {
                let coerced = prev
                    .args
                    .get(key)
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.trim().parse::<i64>().ok());
                if let Some(n) = coerced {
                    let mut call = prev.clone();
                    call.args.insert(key.to_string(), n.into());
                    return Ok(call);
                }
            }
            return self.choose(tools, request);
        }

        if error_message.contains("missing required argument") {
            if let Some(key) = quoted_key(error_message) {
                let definition = tools.iter().find(|t| t.name == prev.tool);
                let position = definition
                    .and_then(|d| d.parameters.iter().position(|p| p.name == key));
                if let Some(idx) = position {
                    if let Some(n) = extract_integers(request).get(idx) {
                        let mut call = prev.clone();
                        call.args.insert(key.to_string(), (*n).into());
                        return Ok(call);
                    }
                }
            }
            return self.choose(tools, request);
        }

        // Execution faults and anything unrecognized: start over
        self.choose(tools, request)
    }
}
