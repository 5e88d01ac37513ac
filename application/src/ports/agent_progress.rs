//! Agent progress notifications
//!
//! Optional hooks for observing the retry loop from the outside (the CLI
//! prints them). All methods default to no-ops so implementations only
//! override what they care about.

use relay_domain::tool::entities::ToolCall;

/// Observer for agent loop progress
pub trait AgentProgressNotifier: Send + Sync {
    /// An invocation attempt is about to be submitted (0-indexed)
    fn on_attempt(&self, _attempt: u32, _call: &ToolCall) {}

    /// An attempt failed with the given message
    fn on_failure(&self, _attempt: u32, _message: &str) {}

    /// The loop finished successfully on the given attempt
    fn on_success(&self, _attempt: u32, _value: &serde_json::Value) {}
}

/// No-op notifier for callers that do not report progress
pub struct NoAgentProgress;

impl AgentProgressNotifier for NoAgentProgress {}
