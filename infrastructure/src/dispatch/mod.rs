//! Dispatch boundary
//!
//! The engine itself plus everything that fronts it: the wire protocol
//! types, the auth gate, and the in-process client adapter.

pub mod auth;
pub mod client;
pub mod engine;
pub mod protocol;

pub use auth::ApiKeyGate;
pub use client::InProcessDispatchClient;
pub use engine::DispatchEngine;
pub use protocol::{DiscoveryResponse, ErrorBody, InvokeRequest, InvokeResponse, ToolInfo};
