//! Response shapes returned by the `generateContent` endpoint.
//!
//! Every field is optional on the wire; unknown fields are ignored.

use duang_core::generator::ResponseText;
use serde::Deserialize;

/// Top-level `generateContent` response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    /// Pre-joined text, present on some gateways and SDK-shaped responses.
    pub text: Option<String>,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// First finish reason reported by any candidate, e.g. `"SAFETY"`.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .iter()
            .find_map(|c| c.finish_reason.as_deref())
    }
}

impl ResponseText for GenerateContentResponse {
    /// Prefers the convenience `text` field; otherwise joins every text part
    /// of every candidate, in order, with `\n`.
    fn extract_text(&self) -> Option<String> {
        if let Some(text) = self.text.as_deref().filter(|t| !t.trim().is_empty()) {
            return Some(text.to_string());
        }

        let joined = self
            .candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
