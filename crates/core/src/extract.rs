//! Recover a JSON object from loosely formatted model output.
//!
//! Two attempts are made: the text with any surrounding code fence removed,
//! then the span from the first `{` to the last `}`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?[ \t]*\r?\n?").expect("valid regex"));

static FENCE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?```[ \t]*$").expect("valid regex"));

/// Longest slice of raw text carried in an [`CoreError::InvalidAiFormat`].
const PREVIEW_CHARS: usize = 200;

/// Remove a leading fence opener (optionally tagged `json`) and a trailing
/// fence.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let start = FENCE_OPEN_RE.find(trimmed).map_or(0, |m| m.end());
    let body = &trimmed[start..];
    let end = FENCE_CLOSE_RE.find(body).map_or(body.len(), |m| m.start());
    body[..end].trim()
}

/// Decode the JSON object carried by `text`.
pub fn extract_json(text: &str) -> Result<Value, CoreError> {
    if let Some(value) = parse_object(strip_code_fence(text)) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Some(value) = parse_object(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(CoreError::InvalidAiFormat(preview(text)))
}

fn parse_object(candidate: &str) -> Option<Value> {
    serde_json::from_str::<Value>(candidate)
        .ok()
        .filter(Value::is_object)
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
