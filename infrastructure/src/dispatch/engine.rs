//! Dispatch engine: resolve, validate, invoke
//!
//! [`DispatchEngine`] owns the tool registry (descriptive metadata) and the
//! handler bindings, constructed once at startup and immutable afterwards.
//! It is `Send + Sync` with no interior mutability, so concurrent requests
//! dispatch against it without locking.

use relay_domain::tool::entities::{ToolCall, ToolDefinition, ToolSpec};
use relay_domain::tool::traits::{DefaultToolValidator, ToolHandler, ToolValidator};
use relay_domain::tool::value_objects::{DispatchError, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Engine mapping tool calls to outcomes.
///
/// The registry ([`ToolSpec`]) is the single source of truth: discovery via
/// [`list_tools`](Self::list_tools) and validation inside
/// [`dispatch`](Self::dispatch) both read the same instance. Handler
/// bindings are held in a separate map and are never exposed.
pub struct DispatchEngine {
    spec: ToolSpec,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    validator: DefaultToolValidator,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec::new(),
            handlers: HashMap::new(),
            validator: DefaultToolValidator,
        }
    }

    /// Register a tool: its descriptive definition and its execution
    /// binding, under the definition's name.
    pub fn register(mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>) -> Self {
        self.handlers.insert(definition.name.clone(), handler);
        self.spec = self.spec.register(definition);
        self
    }

    /// The registry of descriptive metadata
    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Discovery view: descriptive metadata only, sorted by name.
    /// Handler bindings never appear here.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        let mut tools: Vec<ToolDefinition> = self.spec.all().cloned().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Dispatch one tool call: exact-name lookup, schema validation, then
    /// a single handler invocation. Every outcome is a [`ToolResult`];
    /// validation failures short-circuit before the handler runs.
    pub fn dispatch(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.spec.get(&call.tool) else {
            debug!(tool = %call.tool, "dispatch rejected: unknown tool");
            return ToolResult::failure(&call.tool, DispatchError::unknown_tool(&call.tool));
        };

        if let Err(e) = self.validator.validate(call, definition) {
            debug!(tool = %call.tool, error = %e, "dispatch rejected: invalid arguments");
            return ToolResult::failure(&call.tool, e.into());
        }

        // The spec and handler maps are registered together, so a validated
        // name always has a binding.
        let Some(handler) = self.handlers.get(&call.tool) else {
            return ToolResult::failure(
                &call.tool,
                DispatchError::execution_failed(format!("no handler bound for '{}'", call.tool)),
            );
        };

        match handler.invoke(&call.args) {
            Ok(value) => {
                debug!(tool = %call.tool, "dispatch succeeded");
                ToolResult::success(&call.tool, value)
            }
            Err(fault) => {
                debug!(tool = %call.tool, fault = %fault, "handler fault");
                ToolResult::failure(&call.tool, DispatchError::execution_failed(fault))
            }
        }
    }
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
