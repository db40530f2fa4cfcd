//! Error types shared between the rate client and the tool surface.
//!
//! The `ShippingError` enum keeps the full failure taxonomy (configuration,
//! request validation, transport, HTTP status, timeout, JSON parsing) so the
//! client and its logs can tell them apart. Only the user-facing boundary
//! flattens them into [`FAILURE_MESSAGE`].
use std::time::Duration;

use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Single opaque message shown to the user for every failed calculation.
pub const FAILURE_MESSAGE: &str =
    "Failed to calculate shipping costs. Please check your input parameters.";

/// Unified error type for shipping rate lookups.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// Missing credential or otherwise unusable client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request parameters rejected before contacting the rate API.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure (DNS, connect, TLS, reading the body).
    #[error("Network error: {0}")]
    Network(String),

    /// The rate API answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, as returned by the API.
        body: String,
    },

    /// No response within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body is not a list of carrier quotes.
    #[error("JSON serialization/deserialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A state transition that the invocation lifecycle does not allow.
    #[error("Invalid transition {transition} from state {state}")]
    InvalidTransition {
        /// Name of the state the transition was applied to.
        state: String,
        /// Name of the rejected transition.
        transition: String,
    },

    /// Internal logic error (e.g. a worker exited without reporting).
    #[error("Internal Logic Error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`ShippingError`], used for logging.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    InvalidRequest,
    Network,
    Timeout,
    Parse,
    Internal,
}

impl ShippingError {
    /// Classify the error. Non-success HTTP statuses count as network failures.
    pub fn kind(&self) -> FailureKind {
        match self {
            ShippingError::Configuration(_) => FailureKind::Configuration,
            ShippingError::InvalidRequest(_) => FailureKind::InvalidRequest,
            ShippingError::Network(_) | ShippingError::Status { .. } => FailureKind::Network,
            ShippingError::Timeout(_) => FailureKind::Timeout,
            ShippingError::Parse(_) => FailureKind::Parse,
            ShippingError::InvalidTransition { .. } | ShippingError::Internal(_) => {
                FailureKind::Internal
            }
        }
    }

    /// Message safe to show to the user. Always [`FAILURE_MESSAGE`].
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}
