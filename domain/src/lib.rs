//! Domain layer for tool-relay
//!
//! This crate contains the core tool model: schema-described tool
//! definitions, the immutable tool registry, argument validation, and the
//! dispatch error taxonomy. It has no dependencies on infrastructure or
//! transport concerns.
//!
//! # Core Concepts
//!
//! - A **tool** is a named operation described by a [`ToolDefinition`]:
//!   a description plus a typed argument schema.
//! - A [`ToolSpec`] is the registry of definitions, the single source of
//!   truth for both discovery output and validation rules.
//! - A [`ToolCall`] is one invocation request; validation checks it against
//!   the schema before the bound handler ever runs.
//! - A [`ToolResult`] is the structured outcome of one dispatch attempt.

pub mod tool;

// Re-export commonly used types
pub use tool::{
    entities::{ArgType, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolHandler, ToolValidator},
    value_objects::{DispatchError, ErrorCategory, ToolResult, ValidationError},
};
