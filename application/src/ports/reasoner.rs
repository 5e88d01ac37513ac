//! Reasoner port
//!
//! Defines the interface to the decision-making component that selects a
//! tool and arguments for a user request. The backing reasoner is a black
//! box as far as the loop is concerned, as long as it satisfies this
//! contract.

use async_trait::async_trait;
use relay_domain::tool::entities::{ToolCall, ToolDefinition};
use thiserror::Error;

/// Errors that can occur while obtaining a decision
#[derive(Error, Debug)]
pub enum ReasonerError {
    /// The reasoner's output could not be parsed into a tool call shape.
    /// The agent loop treats this as a failed attempt and routes the parse
    /// error into the next reflection.
    #[error("malformed decision: {0}")]
    MalformedDecision(String),

    /// The reasoner could not be reached or failed to respond. Retryable,
    /// like any transport fault.
    #[error("reasoner unavailable: {0}")]
    Unavailable(String),
}

/// The decision oracle behind the agent loop
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Select a tool and arguments for the request. Called once, at loop
    /// start, with the discovered tool metadata.
    async fn decide(
        &self,
        tools: &[ToolDefinition],
        request: &str,
    ) -> Result<ToolCall, ReasonerError>;

    /// Produce a corrected tool call after a failed attempt.
    ///
    /// `prev_call` is `None` when the previous decision could not be parsed
    /// at all. Implementations should run in their most deterministic mode
    /// here: the step is corrective, not exploratory.
    async fn reflect(
        &self,
        tools: &[ToolDefinition],
        request: &str,
        prev_call: Option<&ToolCall>,
        error_message: &str,
    ) -> Result<ToolCall, ReasonerError>;
}
