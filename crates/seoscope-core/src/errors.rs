//! Invocation error taxonomy.
//!
//! Every settled failure is classified into exactly one [`ErrorKind`];
//! [`InvocationError`] is the value the coordinator writes into session
//! state and returns to callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Error kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Classification of a failed invocation.
///
/// The first three kinds are detected synchronously before any network
/// activity; the rest describe transport or response-contract failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The submitted tool id does not resolve in the catalog.
    UnknownTool,
    /// The credential is absent or shorter than the minimum length.
    MissingCredential,
    /// The user input is empty or whitespace-only.
    EmptyInput,
    /// A transport-level error occurred during an attempt.
    NetworkFailure,
    /// The remote service answered with a non-success status.
    HttpError,
    /// Every attempt in the retry budget failed.
    ExhaustedRetries,
    /// A success response carried no extractable text.
    EmptyResponseBody,
    /// The flagship tool's response text does not match the report schema.
    MalformedSchemaResponse,
}

impl ErrorKind {
    /// Stable identifier for log fields and diagnostics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown_tool",
            Self::MissingCredential => "missing_credential",
            Self::EmptyInput => "empty_input",
            Self::NetworkFailure => "network_failure",
            Self::HttpError => "http_error",
            Self::ExhaustedRetries => "exhausted_retries",
            Self::EmptyResponseBody => "empty_response_body",
            Self::MalformedSchemaResponse => "malformed_schema_response",
        }
    }

    /// Whether this kind is rejected before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool | Self::MissingCredential | Self::EmptyInput
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Invocation error
// ─────────────────────────────────────────────────────────────────────────────

/// Error surfaced for one settled invocation.
///
/// Carries the originating tool id so a late-arriving failure can be
/// correlated against the currently active tool before being written
/// into session state.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{kind}: {message}")]
pub struct InvocationError {
    /// Id of the tool the invocation was submitted against.
    pub tool_id: String,
    /// Failure classification.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Underlying error rendered to a string, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl InvocationError {
    /// Create an error with no underlying cause.
    #[must_use]
    pub fn new(tool_id: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    #[must_use]
    pub fn with_cause(
        tool_id: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            cause: Some(cause.into()),
            ..Self::new(tool_id, kind, message)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
