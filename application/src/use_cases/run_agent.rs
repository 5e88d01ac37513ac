//! Run Agent use case
//!
//! Orchestrates one user request through the decision loop:
//!
//! ```text
//! SELECTING ──▶ INVOKING ──▶ DONE (success)
//!                  │
//!                  └──▶ REFLECTING ──▶ INVOKING ──▶ …
//!                            │
//!                            └──▶ EXHAUSTED (retry budget spent)
//! ```
//!
//! The reasoner selects an initial tool call; each failed attempt is fed
//! back into a corrective reflection until the call succeeds or the budget
//! of `max_retries` corrections is spent. Attempts are sequential; there
//! is no parallel fan-out of candidate calls.

use crate::ports::agent_progress::{AgentProgressNotifier, NoAgentProgress};
use crate::ports::dispatch_client::DispatchClientPort;
use crate::ports::reasoner::Reasoner;
use relay_domain::tool::entities::ToolCall;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default number of corrective retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Errors that can terminate a request
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("tool discovery failed: {0}")]
    DiscoveryFailed(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("request \"{request}\" failed after {attempts} attempt(s)")]
    RetriesExhausted { request: String, attempts: u32 },
}

/// Output of a successful run
#[derive(Debug, Clone)]
pub struct RunAgentOutput {
    /// Value returned by the tool
    pub value: serde_json::Value,
    /// Total attempts consumed, including the successful one
    pub attempts: u32,
}

/// One attempt's record, kept for the duration of the loop only
#[derive(Debug, Clone)]
struct AttemptRecord {
    attempt: u32,
    call: Option<ToolCall>,
    error: String,
}

/// Use case driving the decide → call → reflect → retry loop
pub struct RunAgentUseCase<R: Reasoner, D: DispatchClientPort> {
    reasoner: Arc<R>,
    client: Arc<D>,
    max_retries: u32,
}

impl<R: Reasoner, D: DispatchClientPort> RunAgentUseCase<R, D> {
    pub fn new(reasoner: Arc<R>, client: Arc<D>) -> Self {
        Self {
            reasoner,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the retry budget. `max_retries` corrections after the first
    /// attempt, so up to `max_retries + 1` invocation attempts in total.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Run one request to completion without progress reporting
    pub async fn execute(&self, request: &str) -> Result<RunAgentOutput, AgentError> {
        self.execute_with_progress(request, &NoAgentProgress).await
    }

    /// Run one request to completion
    pub async fn execute_with_progress(
        &self,
        request: &str,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<RunAgentOutput, AgentError> {
        // SELECTING: discover the registry's public shape, then ask the
        // reasoner for an initial call. A decision that cannot be parsed
        // still consumes an attempt slot.
        let tools = self
            .client
            .discover()
            .await
            .map_err(|e| AgentError::DiscoveryFailed(e.to_string()))?;

        info!(request, tools = tools.len(), "starting agent loop");

        let mut current: Result<ToolCall, String> = self
            .reasoner
            .decide(&tools, request)
            .await
            .map_err(|e| e.to_string());

        let mut history: Vec<AttemptRecord> = Vec::new();
        let mut attempt: u32 = 0;

        loop {
            // INVOKING (or an unusable decision standing in for it)
            let (prev_call, failure) = match &current {
                Ok(call) => {
                    progress.on_attempt(attempt, call);
                    debug!(attempt, tool = %call.tool, "dispatching tool call");

                    match self.client.invoke(call).await {
                        Ok(result) if result.is_success() => {
                            let value = result.output().cloned().unwrap_or(serde_json::Value::Null);
                            info!(attempt, tool = %call.tool, "tool call succeeded");
                            progress.on_success(attempt, &value);
                            return Ok(RunAgentOutput {
                                value,
                                attempts: attempt + 1,
                            });
                        }
                        Ok(result) => {
                            let error = result
                                .error()
                                .cloned()
                                .unwrap_or_else(|| {
                                    relay_domain::tool::value_objects::DispatchError::execution_failed(
                                        "dispatch failed without error detail",
                                    )
                                });

                            // A missing credential cannot be fixed by a
                            // corrected call.
                            if !error.is_retryable() {
                                warn!(attempt, "request rejected by auth gate");
                                return Err(AgentError::Unauthorized(error.message));
                            }

                            (Some(call.clone()), error.to_string())
                        }
                        // Transport fault: retryable, same as a dispatch failure
                        Err(e) => (Some(call.clone()), e.to_string()),
                    }
                }
                Err(decision_error) => (None, decision_error.clone()),
            };

            warn!(attempt, error = %failure, "attempt failed");
            progress.on_failure(attempt, &failure);
            history.push(AttemptRecord {
                attempt,
                call: prev_call.clone(),
                error: failure.clone(),
            });

            // EXHAUSTED
            if attempt == self.max_retries {
                debug!(?history, "retry budget exhausted");
                return Err(AgentError::RetriesExhausted {
                    request: request.to_string(),
                    attempts: attempt + 1,
                });
            }

            // REFLECTING: ask for a corrected call using the failure as
            // feedback, then loop back into INVOKING.
            attempt += 1;
            current = self
                .reasoner
                .reflect(&tools, request, prev_call.as_ref(), &failure)
                .await
                .map_err(|e| e.to_string());
        }
    }
}
