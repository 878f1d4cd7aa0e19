//! Structured report contract: response schema and payload parsing.
//!
//! The flagship keyword tool asks the model for a single JSON object and
//! pins its shape with a response schema. Parsing is strict about the
//! document shape (required fields must be present) but tolerant of extra
//! fields the model may add.

use seoscope_core::StructuredReport;

use crate::errors::SchemaError;

/// JSON response schema for the structured keyword report.
///
/// Sent as `generationConfig.responseSchema`. Uses the API's uppercase type
/// names and `propertyOrdering` to keep field order stable in the output.
#[must_use]
pub fn report_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "targetTopic": {
                "type": "STRING",
                "description": "The analyzed topic"
            },
            "relatedKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "minItems": 3,
                "maxItems": 5,
                "description": "Closely related search keywords"
            },
            "contentStructure": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "sectionTitle": { "type": "STRING" },
                        "coverageGoal": { "type": "STRING" }
                    },
                    "required": ["sectionTitle", "coverageGoal"],
                    "propertyOrdering": ["sectionTitle", "coverageGoal"]
                },
                "description": "Recommended article outline"
            }
        },
        "required": ["targetTopic", "relatedKeywords", "contentStructure"],
        "propertyOrdering": ["targetTopic", "relatedKeywords", "contentStructure"]
    })
}

/// Parse a schema-driven response body into a [`StructuredReport`].
///
/// # Errors
///
/// [`SchemaError::Empty`] if the text is empty or whitespace,
/// [`SchemaError::Parse`] if it is not JSON or a required field is missing.
pub fn parse_report(text: &str) -> Result<StructuredReport, SchemaError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SchemaError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
