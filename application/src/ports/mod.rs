//! Port definitions for the application layer
//!
//! Ports are trait interfaces that the application layer depends on.
//! Implementations (adapters) live in the infrastructure layer.

pub mod agent_progress;
pub mod dispatch_client;
pub mod reasoner;
