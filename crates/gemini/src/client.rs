//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps a single model behind [`TextGenerator`]. JSON response mode is
//! requested first; a 400 answer that names JSON mode (model without it)
//! triggers one plain-mode request. Nothing else is retried, and no timeout
//! is set here.

use async_trait::async_trait;
use duang_core::error::CoreError;
use duang_core::generator::{ResponseText, TextGenerator};
use serde_json::json;

use crate::response::GenerateContentResponse;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model id.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Lowercased fragments of a 400 body that blame the JSON response mode.
const JSON_MODE_MARKERS: [&str; 3] = ["responsemimetype", "response_mime_type", "json mode"];

/// Whether a 400 body rejects the JSON response mode rather than the
/// request as a whole (bad key, malformed prompt).
fn rejects_json_mode(body: &str) -> bool {
    let body = body.to_ascii_lowercase();
    JSON_MODE_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential. `None` disables every call.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<GeminiApiError> for CoreError {
    fn from(err: GeminiApiError) -> Self {
        CoreError::UpstreamFailed(err.to_string())
    }
}

/// HTTP client for one Gemini model.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        let config = GeminiConfig {
            api_key: config.api_key.filter(|k| !k.trim().is_empty()),
            ..config
        };
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one `generateContent` request.
    async fn request(
        &self,
        api_key: &str,
        prompt: &str,
        json_mode: bool,
    ) -> Result<GenerateContentResponse, GeminiApiError> {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });
        if json_mode {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(CoreError::UpstreamUnavailable);
        };

        let response = match self.request(api_key, prompt, true).await {
            Err(GeminiApiError::ApiError { status: 400, body }) if rejects_json_mode(&body) => {
                tracing::info!(
                    model = %self.config.model,
                    body = %body,
                    "JSON response mode rejected, falling back to plain generation",
                );
                self.request(api_key, prompt, false).await
            }
            other => other,
        }
        .inspect_err(|e| {
            tracing::warn!(model = %self.config.model, error = %e, "Gemini request failed");
        })?;

        response.extract_text().ok_or_else(|| {
            tracing::warn!(
                model = %self.config.model,
                finish_reason = response.finish_reason().unwrap_or("none"),
                "Gemini response carried no text",
            );
            CoreError::UpstreamEmpty
        })
    }
}
