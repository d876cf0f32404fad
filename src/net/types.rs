//! Wire DTOs for the PyTool REST backend.
//!
//! DESIGN
//! ======
//! The backend stores every text column as nullable, so string fields decode
//! through lenient helpers that map `null`/missing to an empty string instead
//! of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Token pair returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Profile returned by `GET /me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub username: String,
}

/// Default sandbox timeout in seconds.
pub const RUN_CODE_TIMEOUT_SECS: u32 = 30;

/// Body for `POST /run-code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunCodeRequest {
    pub code: String,
    pub timeout: u32,
}

/// Sandbox result. `output` is stdout, `error` is stderr or a runner message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RunCodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub output: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub error: String,
}

/// Body for `POST /call-api`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiCallRequest {
    pub url: String,
    pub method: String,
    pub headers: serde_json::Map<String, serde_json::Value>,
    pub body: Option<serde_json::Value>,
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Body for `POST /ai/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AiChatRequest {
    pub prompt: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Chat reply; exactly one of `response` / `error` is normally present.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AiChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl AiChatResponse {
    /// Text shown in the transcript, and whether it is an error.
    pub fn into_message(self) -> (String, bool) {
        match (self.response, self.error) {
            (Some(text), _) if !text.is_empty() => (text, false),
            (_, Some(err)) => (err, true),
            _ => ("Empty response from provider".to_owned(), true),
        }
    }
}

/// Decode a nullable JSON string, treating `null` and non-string scalars
/// leniently.
pub fn deserialize_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
