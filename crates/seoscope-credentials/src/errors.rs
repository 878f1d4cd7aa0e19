//! Credential storage error types.

/// Errors that can occur when persisting credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
