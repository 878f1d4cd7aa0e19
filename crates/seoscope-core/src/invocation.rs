//! Invocation request and result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::StructuredReport;

/// One user submission, assembled by the coordinator before validation.
///
/// The credential is carried exactly as read from the store; absence is
/// recorded here and rejected during validation rather than at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Id of the tool the submission targets.
    pub tool_id: String,
    /// Free-form user input.
    pub user_input: String,
    /// Credential as read from the store, when present.
    pub credential: Option<String>,
}

/// Successful outcome of a settled invocation (discriminated by `kind`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InvocationResult {
    /// Parsed report from the schema-driven flagship tool.
    #[serde(rename = "structured")]
    Structured {
        /// Originating tool id.
        #[serde(rename = "toolId")]
        tool_id: String,
        /// The validated report.
        payload: StructuredReport,
    },
    /// Raw text from a free-text tool.
    #[serde(rename = "text")]
    Text {
        /// Originating tool id.
        #[serde(rename = "toolId")]
        tool_id: String,
        /// Response text as returned by the service.
        text: String,
        /// When the invocation settled.
        #[serde(rename = "producedAt")]
        produced_at: DateTime<Utc>,
    },
}

impl InvocationResult {
    /// Id of the tool that produced this result.
    #[must_use]
    pub fn tool_id(&self) -> &str {
        match self {
            Self::Structured { tool_id, .. } | Self::Text { tool_id, .. } => tool_id,
        }
    }

    /// Returns `true` for a structured (flagship) result.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured { .. })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
