//! Transport and schema error types.

use thiserror::Error;

use seoscope_core::ErrorKind;

/// Errors from a single request to the Gemini API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, timeout,
    /// or a body that could not be read).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },
}

impl ClientError {
    /// The invocation error kind this transport error maps to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::NetworkFailure,
            Self::Status { .. } => ErrorKind::HttpError,
        }
    }
}

/// Every attempt of a retried operation failed.
///
/// Carries the error from the final attempt as its source so callers can
/// report what ultimately went wrong.
#[derive(Debug, Error)]
#[error("all {attempts} attempts failed: {last}")]
pub struct RetryError {
    /// Total number of attempts made.
    pub attempts: u32,
    /// The error from the final attempt.
    #[source]
    pub last: ClientError,
}

/// Errors from parsing a schema-driven report payload.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The response text was present but empty.
    #[error("schema response was empty")]
    Empty,
    /// The response text was not valid JSON matching the report shape.
    #[error("schema response did not parse: {0}")]
    Parse(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
