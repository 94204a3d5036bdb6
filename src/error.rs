//! Error taxonomy for the bridge.
//!
//! Only fatal conditions are modeled here. Recoverable layout anomalies are
//! logged and skipped, never returned.

use crate::types::TypeId;

/// Convenience result type used across spark-bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Fatal bridge errors.
///
/// Every variant signals a precondition violation or a version/registration
/// mismatch between host and engine. None of them are retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// An absent or sanitized-away handle where a concrete node is mandatory.
    #[error("invalid view handle: {context}")]
    InvalidHandle { context: &'static str },

    /// No factory matched and the engine offered no further delegation.
    #[error("unknown component type {type_id}")]
    UnknownComponent { type_id: TypeId },

    /// The `body` delegation chain did not terminate within the configured depth.
    #[error("delegation limit reached at depth {depth} (last type {type_id})")]
    DelegationLimit { type_id: TypeId, depth: usize },

    /// A factory was already registered for this id.
    #[error("component type {type_id} is already registered")]
    DuplicateRegistration { type_id: TypeId },

    /// A factory failed to build its node.
    #[error("factory for {type_id} failed: {message}")]
    Factory { type_id: TypeId, message: String },
}

impl BridgeError {
    /// Build a [`BridgeError::Factory`] value.
    pub fn factory(type_id: TypeId, message: impl Into<String>) -> Self {
        Self::Factory {
            type_id,
            message: message.into(),
        }
    }
}
