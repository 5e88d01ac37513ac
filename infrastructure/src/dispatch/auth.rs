//! Auth gate for the invoke boundary
//!
//! An opaque shared-secret check that sits in front of the engine.
//! Rejection surfaces as the `Unauthorized` category, which the agent loop
//! treats as fatal: no corrected call can supply a missing credential.

use relay_domain::tool::value_objects::DispatchError;

/// Shared-secret credential gate
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    expected: String,
}

impl ApiKeyGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Check an opaque credential. Only an exact match passes.
    pub fn check(&self, credential: Option<&str>) -> Result<(), DispatchError> {
        match credential {
            Some(key) if key == self.expected => Ok(()),
            _ => Err(DispatchError::unauthorized()),
        }
    }
}
