//! The static tool catalog with O(1) id lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::descriptor::{ToolCategory, ToolDescriptor, ToolKind};
use crate::prompts;

/// Fixed presentation order for categories.
pub const CATEGORY_ORDER: [ToolCategory; 4] = [
    ToolCategory::Research,
    ToolCategory::Content,
    ToolCategory::Optimization,
    ToolCategory::Technical,
];

/// Every tool, in presentation order. The flagship is the first entry.
static TOOLS: [ToolDescriptor; 10] = [
    ToolDescriptor {
        id: "keyword-insight",
        display_name: "Keyword Insight Report",
        category: ToolCategory::Research,
        kind: ToolKind::SchemaDriven,
        prompt_builder: prompts::keyword_insight,
    },
    ToolDescriptor {
        id: "keyword-difficulty",
        display_name: "Keyword Difficulty Check",
        category: ToolCategory::Research,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::keyword_difficulty,
    },
    ToolDescriptor {
        id: "competitor-scan",
        display_name: "Competitor Content Scan",
        category: ToolCategory::Research,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::competitor_scan,
    },
    ToolDescriptor {
        id: "content-brief",
        display_name: "Content Brief Builder",
        category: ToolCategory::Content,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::content_brief,
    },
    ToolDescriptor {
        id: "title-generator",
        display_name: "Title Tag Generator",
        category: ToolCategory::Content,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::title_generator,
    },
    ToolDescriptor {
        id: "meta-description",
        display_name: "Meta Description Writer",
        category: ToolCategory::Content,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::meta_description,
    },
    ToolDescriptor {
        id: "on-page-audit",
        display_name: "On-Page Audit",
        category: ToolCategory::Optimization,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::on_page_audit,
    },
    ToolDescriptor {
        id: "internal-linking",
        display_name: "Internal Linking Planner",
        category: ToolCategory::Optimization,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::internal_linking,
    },
    ToolDescriptor {
        id: "schema-markup",
        display_name: "Schema Markup Helper",
        category: ToolCategory::Technical,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::schema_markup,
    },
    ToolDescriptor {
        id: "robots-advisor",
        display_name: "Robots.txt Advisor",
        category: ToolCategory::Technical,
        kind: ToolKind::FreeText,
        prompt_builder: prompts::robots_advisor,
    },
];

/// Id index over the catalog.
static TOOLS_BY_ID: LazyLock<HashMap<&'static str, &'static ToolDescriptor>> =
    LazyLock::new(|| TOOLS.iter().map(|d| (d.id, d)).collect());

/// Resolve a tool id to its descriptor. Lookup is O(1) and case-sensitive.
#[must_use]
pub fn resolve(tool_id: &str) -> Option<&'static ToolDescriptor> {
    TOOLS_BY_ID.get(tool_id).copied()
}

/// Every registered descriptor, in presentation order.
#[must_use]
pub fn all() -> &'static [ToolDescriptor] {
    &TOOLS
}

/// The flagship schema-driven descriptor.
#[must_use]
pub fn core_tool() -> &'static ToolDescriptor {
    // Invariant: the flagship is the catalog's first entry.
    &TOOLS[0]
}

/// Descriptors grouped by category, in fixed presentation order.
///
/// The grouping is presentation data; ordering within a category follows
/// the catalog definition order.
#[must_use]
pub fn list_by_category() -> Vec<(ToolCategory, Vec<&'static ToolDescriptor>)> {
    CATEGORY_ORDER
        .iter()
        .map(|&category| {
            let tools: Vec<&'static ToolDescriptor> =
                TOOLS.iter().filter(|d| d.category == category).collect();
            (category, tools)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
