//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Request and response shapes follow the REST API JSON format: camelCase
//! field names, optional fields omitted when absent. Only the subset used
//! by tool invocations is modeled.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// A text part inside contents or a system instruction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextPart {
    /// Text content.
    pub text: String,
}

/// A single content entry in the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestContent {
    /// Parts containing the user query.
    pub parts: Vec<TextPart>,
}

/// System instruction for the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// Parts containing the system prompt.
    pub parts: Vec<TextPart>,
}

/// A capability granted to the model for this request.
///
/// The API expects `{"google_search": {}}` to enable search grounding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestTool {
    /// Enables Google Search grounding when present.
    pub google_search: serde_json::Map<String, serde_json::Value>,
}

impl RequestTool {
    /// The search grounding capability.
    #[must_use]
    pub fn search_grounding() -> Self {
        Self {
            google_search: serde_json::Map::new(),
        }
    }
}

/// Generation config requesting a structured JSON response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type of the response (`application/json` for structured output).
    pub response_mime_type: String,
    /// JSON schema the response must conform to.
    pub response_schema: serde_json::Value,
}

/// Request body for `generateContent`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation contents (a single user turn for tool invocations).
    pub contents: Vec<RequestContent>,
    /// Capabilities granted to the model.
    pub tools: Vec<RequestTool>,
    /// System prompt framing the tool's task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    /// Structured output config (schema-driven tools only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Build a free-text request with search grounding enabled.
    #[must_use]
    pub fn new(system_prompt: &str, user_query: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: user_query.to_string(),
                }],
            }],
            tools: vec![RequestTool::search_grounding()],
            system_instruction: Some(SystemInstruction {
                parts: vec![TextPart {
                    text: system_prompt.to_string(),
                }],
            }),
            generation_config: None,
        }
    }

    /// Request a structured JSON response conforming to `schema`.
    #[must_use]
    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        });
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// A text part in a response candidate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResponsePart {
    /// Text content, absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Content inside a response candidate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResponseContent {
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response candidate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResponseCandidate {
    /// The content of this candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ResponseContent>,
}

/// Response body from `generateContent`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Response candidates.
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Returns `None` when any link in that path is absent, which callers
    /// treat as an empty response body.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
