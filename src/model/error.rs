//! Error types for fetching user pages.
//!
//! Every fetch failure is **non-fatal**: the store records it as the last
//! error, keeps the last successful list on screen, and the UI surfaces it
//! once as a transient notification.
//!
//! # Error Taxonomy
//!
//! - [`FetchError::NetworkFailure`] - transport errors, timeouts, non-2xx
//!   responses, server-reported errors
//! - [`FetchError::DecodeFailure`] - payload that cannot be turned into records
//! - [`FetchError::InvalidRequest`] - request parameters or client that cannot
//!   be built
//!
//! Discarding a superseded result is not an error and never produces one.

use thiserror::Error;

/// Failure of a single page fetch.
///
/// `Clone + PartialEq` so it can live inside published snapshots and be
/// compared in tests.
///
/// # Examples
///
/// ```
/// use ruv::model::FetchError;
///
/// let err = FetchError::NetworkFailure {
///     reason: "connection reset".to_string(),
/// };
/// assert!(err.to_string().contains("connection reset"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure, timeout or error status from the server.
    #[error("Network failure: {reason}")]
    NetworkFailure {
        /// Human-readable cause.
        reason: String,
    },

    /// Response body was not a valid page of records.
    #[error("Malformed response: {reason}")]
    DecodeFailure {
        /// Human-readable cause.
        reason: String,
    },

    /// The request could not be built.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Human-readable cause.
        reason: String,
    },
}

impl FetchError {
    /// Transport failure or non-success status.
    pub fn network(reason: impl Into<String>) -> Self {
        Self::NetworkFailure {
            reason: reason.into(),
        }
    }

    /// Payload did not match the expected shape.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            reason: reason.into(),
        }
    }

    /// The request URL could not be built.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Short title for notifications.
    pub fn title(&self) -> &'static str {
        match self {
            FetchError::NetworkFailure { .. } => "Network error",
            FetchError::DecodeFailure { .. } => "Bad response",
            FetchError::InvalidRequest { .. } => "Invalid request",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::decode(err.to_string())
    }
}
