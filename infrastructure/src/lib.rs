//! Infrastructure layer for tool-relay
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the dispatch engine with its builtin tool set, the
//! wire protocol types, the auth gate, the in-process dispatch client,
//! reasoner implementations, and configuration file loading.

pub mod config;
pub mod dispatch;
pub mod reasoner;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, RelayConfig};
pub use dispatch::{
    auth::ApiKeyGate,
    client::InProcessDispatchClient,
    engine::DispatchEngine,
    protocol::{DiscoveryResponse, ErrorBody, InvokeRequest, InvokeResponse, ToolInfo},
};
pub use reasoner::{KeywordReasoner, ScriptedReasoner, parse_tool_call};
pub use tools::{default_engine, default_tool_spec};
