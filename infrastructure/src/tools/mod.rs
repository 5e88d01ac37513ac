//! Builtin tool implementations
//!
//! The reference tool set: integer arithmetic. Definitions and handlers
//! are registered together so the discovery view and the execution bindings
//! always derive from the same place.

pub mod arithmetic;

use crate::dispatch::engine::DispatchEngine;
use relay_domain::tool::entities::ToolSpec;
use std::sync::Arc;

/// Create the default tool specification with all builtin tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(arithmetic::add_definition())
        .register(arithmetic::subtract_definition())
        .register(arithmetic::multiply_definition())
}

/// Create a dispatch engine wired with all builtin tools
pub fn default_engine() -> DispatchEngine {
    DispatchEngine::new()
        .register(arithmetic::add_definition(), Arc::new(arithmetic::execute_add))
        .register(
            arithmetic::subtract_definition(),
            Arc::new(arithmetic::execute_subtract),
        )
        .register(
            arithmetic::multiply_definition(),
            Arc::new(arithmetic::execute_multiply),
        )
}
