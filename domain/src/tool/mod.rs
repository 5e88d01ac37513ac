//! Tool domain module
//!
//! Defines how tools are described, looked up, validated, and how their
//! outcomes are reported.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (outcome)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`] — registry of available tools, immutable after construction
//! - [`ToolDefinition`] — schema for a single tool (name, description, typed args)
//! - [`ToolCall`] — an invocation request with arguments
//! - [`ToolResult`] — dispatch outcome, success value or categorized error
//! - [`ToolValidator`] — pure trait for argument validation
//! - [`ToolHandler`] — the execution binding, kept strictly apart from the
//!   descriptive metadata so discovery can never leak it
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application**: `DispatchClientPort` / `Reasoner` port traits
//! - **Infrastructure**: `DispatchEngine`, builtin tools, wire protocol

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ArgType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolHandler, ToolValidator};
pub use value_objects::{DispatchError, ErrorCategory, ToolResult, ValidationError};
