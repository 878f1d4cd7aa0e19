//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use tracing::{instrument, warn};

use crate::errors::ClientError;
use crate::types::{GenerateRequest, GenerateResponse};

/// Client for the Gemini REST API.
///
/// Holds a reused [`reqwest::Client`] plus the endpoint and model it talks
/// to. The API key is passed per call, never stored here, and is stripped
/// from transport errors so it cannot leak into logs or error messages.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a client for the given endpoint and model.
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, model)
    }

    /// Create a client reusing a shared HTTP client.
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            timeout: None,
        }
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The model this client sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one `generateContent` request.
    ///
    /// # Errors
    ///
    /// [`ClientError::Network`] when no HTTP response was produced,
    /// [`ClientError::Status`] when the API answered with a non-success code.
    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn generate(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ClientError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let mut builder = self.client.post(&url).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error_message(&body);
            warn!(status = status.as_u16(), %message, "generateContent failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = response
            .json::<GenerateResponse>()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(parsed)
    }
}

/// Extract a readable message from a Gemini error body.
///
/// Google errors use `{"error": {"message": "...", "status": "..."}}`.
/// Falls back to the raw body when the envelope is missing.
fn parse_api_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json["error"]["message"].as_str() {
            return msg.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
