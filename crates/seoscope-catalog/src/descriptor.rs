//! Tool descriptor types.

use serde::{Deserialize, Serialize};

/// Prompt pair produced by a descriptor for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptParts {
    /// Instructions framing the model's role and output expectations.
    pub system_prompt: String,
    /// The query sent as user content, embedding the submitted input.
    pub user_query: String,
}

/// How a tool's response is produced and interpreted.
///
/// The coordinator branches once on this tag, never on individual tool ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Structured output validated against the report schema (flagship only).
    SchemaDriven,
    /// Free-form text returned as-is.
    FreeText,
}

/// Presentation grouping for the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Keyword and market research.
    Research,
    /// Content planning and drafting aids.
    Content,
    /// On-page and linking improvements.
    Optimization,
    /// Technical SEO artifacts.
    Technical,
}

impl ToolCategory {
    /// Display label for the category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Content => "Content",
            Self::Optimization => "Optimization",
            Self::Technical => "Technical",
        }
    }
}

/// An entry in the static tool catalog.
///
/// Descriptors are defined once as static data and never mutated.
#[derive(Clone, Copy, Debug)]
pub struct ToolDescriptor {
    /// Unique, stable identifier.
    pub id: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Presentation grouping.
    pub category: ToolCategory,
    /// Response production mode.
    pub kind: ToolKind,
    pub(crate) prompt_builder: fn(&str) -> PromptParts,
}

impl ToolDescriptor {
    /// Whether this is the flagship schema-driven tool.
    #[must_use]
    pub fn is_core(&self) -> bool {
        matches!(self.kind, ToolKind::SchemaDriven)
    }

    /// Build the prompt pair for the given user input.
    #[must_use]
    pub fn build_prompt(&self, input: &str) -> PromptParts {
        (self.prompt_builder)(input)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
