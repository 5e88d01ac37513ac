//! Scripted reasoner
//!
//! Replays a fixed sequence of raw outputs through the decision parser:
//! the first answers `decide`, the rest answer successive `reflect` calls.
//! Useful for demos and for exercising the full loop against the real
//! engine without a model behind it.

use crate::reasoner::decision::parse_tool_call;
use async_trait::async_trait;
use relay_application::ports::reasoner::{Reasoner, ReasonerError};
use relay_domain::tool::entities::{ToolCall, ToolDefinition};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;

pub struct ScriptedReasoner {
    outputs: Mutex<VecDeque<String>>,
}

impl ScriptedReasoner {
    pub fn new<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outputs: Mutex::new(outputs.into_iter().map(Into::into).collect()),
        }
    }

    fn next_decision(&self) -> Result<ToolCall, ReasonerError> {
        let raw = self
            .outputs
            .lock()
            .map_err(|_| ReasonerError::Unavailable("script state poisoned".to_string()))?
            .pop_front()
            .ok_or_else(|| ReasonerError::Unavailable("script exhausted".to_string()))?;

        debug!(raw = %raw, "replaying scripted output");
        parse_tool_call(&raw).map_err(ReasonerError::MalformedDecision)
    }
}

#[async_trait]
impl Reasoner for ScriptedReasoner {
    async fn decide(
        &self,
        _tools: &[ToolDefinition],
        _request: &str,
    ) -> Result<ToolCall, ReasonerError> {
        self.next_decision()
    }

    async fn reflect(
        &self,
        _tools: &[ToolDefinition],
        _request: &str,
        _prev_call: Option<&ToolCall>,
        _error_message: &str,
    ) -> Result<ToolCall, ReasonerError> {
        self.next_decision()
    }
}
