//! In-process dispatch client
//!
//! Adapter implementing [`DispatchClientPort`] against a local engine.
//! Every call still round-trips through the wire protocol types, so the
//! in-process path exercises the exact serialization a remote transport
//! would, including the credential gate.

use crate::dispatch::auth::ApiKeyGate;
use crate::dispatch::engine::DispatchEngine;
use crate::dispatch::protocol::{DiscoveryResponse, InvokeRequest, InvokeResponse};
use async_trait::async_trait;
use relay_application::ports::dispatch_client::{ClientError, DispatchClientPort};
use relay_domain::tool::entities::{ToolCall, ToolDefinition};
use relay_domain::tool::value_objects::ToolResult;
use std::sync::Arc;
use tracing::debug;

pub struct InProcessDispatchClient {
    engine: Arc<DispatchEngine>,
    gate: ApiKeyGate,
    credential: Option<String>,
}

impl InProcessDispatchClient {
    pub fn new(engine: Arc<DispatchEngine>, gate: ApiKeyGate) -> Self {
        Self {
            engine,
            gate,
            credential: None,
        }
    }

    /// Attach the credential presented on every invoke
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }
}

#[async_trait]
impl DispatchClientPort for InProcessDispatchClient {
    async fn discover(&self) -> Result<Vec<ToolDefinition>, ClientError> {
        let body = DiscoveryResponse::from_spec(self.engine.spec());
        let wire =
            serde_json::to_string(&body).map_err(|e| ClientError::Protocol(e.to_string()))?;
        let parsed: DiscoveryResponse =
            serde_json::from_str(&wire).map_err(|e| ClientError::Protocol(e.to_string()))?;

        let definitions = parsed.into_definitions();
        debug!(count = definitions.len(), "discovered tools");
        Ok(definitions)
    }

    async fn invoke(&self, call: &ToolCall) -> Result<ToolResult, ClientError> {
        // The gate sits in front of the engine, exactly as a remote
        // endpoint would check the header before dispatching.
        if let Err(e) = self.gate.check(self.credential.as_deref()) {
            debug!(tool = %call.tool, "invoke rejected at the gate");
            return Ok(ToolResult::failure(&call.tool, e));
        }

        let request = InvokeRequest::from(call);
        let wire =
            serde_json::to_string(&request).map_err(|e| ClientError::Protocol(e.to_string()))?;
        let parsed: InvokeRequest =
            serde_json::from_str(&wire).map_err(|e| ClientError::Protocol(e.to_string()))?;

        let result = self.engine.dispatch(&parsed.into_call());

        let response = InvokeResponse::from_result(&result);
        let wire =
            serde_json::to_string(&response).map_err(|e| ClientError::Protocol(e.to_string()))?;
        let parsed: InvokeResponse =
            serde_json::from_str(&wire).map_err(|e| ClientError::Protocol(e.to_string()))?;

        Ok(parsed.into_result(&call.tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{arithmetic, default_engine};
    use relay_domain::tool::value_objects::ErrorCategory;
    use serde_json::json;

    fn client_with_key(credential: Option<&str>) -> InProcessDispatchClient {
        let engine = Arc::new(default_engine());
        let gate = ApiKeyGate::new("supersecretkey");
        let client = InProcessDispatchClient::new(engine, gate);
        match credential {
            Some(key) => client.with_credential(key),
            None => client,
        }
    }

    #[tokio::test]
    async fn test_discover_round_trips_definitions() {
        let client = client_with_key(Some("supersecretkey"));
        let tools = client.discover().await.unwrap();

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["add_numbers", "multiply_numbers", "subtract_numbers"]
        );
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let client = client_with_key(Some("supersecretkey"));
        let call = ToolCall::new(arithmetic::ADD_NUMBERS)
            .with_arg("a", 7)
            .with_arg("b", 12);

        let result = client.invoke(&call).await.unwrap();
        assert!(result.is_success());
        assert_eq!(result.output(), Some(&json!(19)));
    }

    #[tokio::test]
    async fn test_invoke_failure_keeps_category() {
        let client = client_with_key(Some("supersecretkey"));
        let call = ToolCall::new(arithmetic::ADD_NUMBERS).with_arg("a", 3);

        let result = client.invoke(&call).await.unwrap();
        let error = result.error().unwrap();
        assert_eq!(error.category, ErrorCategory::InvalidArguments);
        assert!(error.message.contains("missing required argument 'b'"));
    }

    #[tokio::test]
    async fn test_invoke_without_credential_is_unauthorized() {
        let client = client_with_key(None);
        let call = ToolCall::new(arithmetic::ADD_NUMBERS)
            .with_arg("a", 1)
            .with_arg("b", 2);

        let result = client.invoke(&call).await.unwrap();
        assert_eq!(
            result.error().unwrap().category,
            ErrorCategory::Unauthorized
        );
    }

    #[tokio::test]
    async fn test_invoke_with_wrong_credential_is_unauthorized() {
        let client = client_with_key(Some("nope"));
        let call = ToolCall::new(arithmetic::ADD_NUMBERS)
            .with_arg("a", 1)
            .with_arg("b", 2);

        let result = client.invoke(&call).await.unwrap();
        assert_eq!(
            result.error().unwrap().category,
            ErrorCategory::Unauthorized
        );
    }
}
