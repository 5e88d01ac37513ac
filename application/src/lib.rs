//! Application layer for tool-relay
//!
//! This crate contains the port definitions and the run-agent use case.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_progress::{AgentProgressNotifier, NoAgentProgress},
    dispatch_client::{ClientError, DispatchClientPort},
    reasoner::{Reasoner, ReasonerError},
};
pub use use_cases::run_agent::{AgentError, RunAgentOutput, RunAgentUseCase};
