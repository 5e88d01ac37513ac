//! Dispatch client port
//!
//! Defines the transport-agnostic boundary to the dispatch engine. The
//! agent loop only ever talks to the engine through this port, so the same
//! loop runs against an in-process engine or a remote one.

use async_trait::async_trait;
use relay_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::ToolResult,
};
use thiserror::Error;

/// Errors raised by the transport itself, as opposed to structured dispatch
/// failures which arrive inside a [`ToolResult`].
///
/// The agent loop treats a transport fault identically to a dispatch
/// failure: retryable up to the budget.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Port for reaching the dispatch boundary
///
/// Discovery returns descriptive metadata only, never handler bindings.
/// Both calls are blocking from the loop's perspective; timeouts are a
/// transport concern behind this interface.
#[async_trait]
pub trait DispatchClientPort: Send + Sync {
    /// Fetch the public shape of the tool registry
    async fn discover(&self) -> Result<Vec<ToolDefinition>, ClientError>;

    /// Submit one tool call for validation and invocation
    async fn invoke(&self, call: &ToolCall) -> Result<ToolResult, ClientError>;
}
