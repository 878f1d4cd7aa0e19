//! Structured report types for the flagship tool.
//!
//! These mirror the JSON shape the remote service is instructed to emit via
//! the schema descriptor in `seoscope-gemini`. Field names serialize as
//! camelCase to match the wire contract.

use serde::{Deserialize, Serialize};

/// One recommended section of the content outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSection {
    /// Heading for the section.
    pub section_title: String,
    /// What the section must cover to rank for the topic.
    pub coverage_goal: String,
}

/// Machine-checkable SEO insight report returned by the flagship tool.
///
/// The remote service is instructed to produce 3–5 related keywords and at
/// least five outline sections; parsing enforces only the presence of the
/// three fields and otherwise trusts the service's conformance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport {
    /// The topic the report targets.
    pub target_topic: String,
    /// Related keywords, ordered by relevance.
    pub related_keywords: Vec<String>,
    /// Recommended content outline.
    pub content_structure: Vec<OutlineSection>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
