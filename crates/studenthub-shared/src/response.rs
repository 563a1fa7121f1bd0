//! Error bodies returned by the backend.

use serde::{Deserialize, Serialize};

const MAX_RAW_LEN: usize = 200;

/// Error payload. Routes disagree on the field name, so every spelling the
/// server uses is accepted, including RFC 7807 `title`/`detail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// Most specific human-readable text, if any.
    pub fn summary(&self) -> Option<&str> {
        [&self.detail, &self.message, &self.error, &self.title]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// Describe an error response body: the JSON message when there is
    /// one, otherwise the (truncated) raw text.
    pub fn describe(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            if let Some(summary) = parsed.summary() {
                return summary.to_string();
            }
        }
        body.trim().chars().take(MAX_RAW_LEN).collect()
    }
}
