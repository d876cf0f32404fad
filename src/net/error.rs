//! Failure type shared by every backend request.
//!
//! DESIGN
//! ======
//! `Unauthorized` is split out from other rejections so callers can route it
//! to the session-expiry path without inspecting status codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("request failed ({status}){}", detail_suffix(.detail.as_deref()))]
    Rejected { status: u16, detail: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    Encode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text, used to
    /// pull out a FastAPI `detail` message.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Rejected { status, detail: extract_detail(body) }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Backend-provided message, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

#[derive(Deserialize)]
struct DetailBody {
    detail: serde_json::Value,
}

/// FastAPI reports errors as `{"detail": "..."}` or, for validation errors,
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: DetailBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
