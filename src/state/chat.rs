//! AI chat transcript state and provider key custody.
//!
//! DESIGN
//! ======
//! Provider API keys are optional: when present they are read from
//! `localStorage` at send time and forwarded in the request body, otherwise
//! the backend falls back to its own configured keys.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::util::storage;

/// LLM provider exposed by the backend proxy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AiProvider {
    #[default]
    Anthropic,
    OpenAi,
}

impl AiProvider {
    pub const ALL: [Self; 2] = [Self::Anthropic, Self::OpenAi];

    /// Wire identifier sent as `provider`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Anthropic => "Claude (Anthropic)",
            Self::OpenAi => "GPT-4o (OpenAI)",
        }
    }

    pub fn key_placeholder(self) -> &'static str {
        match self {
            Self::Anthropic => "sk-ant-...",
            Self::OpenAi => "sk-...",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }

    pub fn storage_key(self) -> String {
        format!("pytool_api_key_{}", self.as_str())
    }

    pub fn load_api_key(self) -> Option<String> {
        storage::load_string(&self.storage_key()).filter(|k| !k.trim().is_empty())
    }

    /// Persist the key; a blank value removes it.
    pub fn save_api_key(self, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            storage::remove(&self.storage_key());
        } else {
            storage::save_string(&self.storage_key(), key);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content }
    }
}

/// State for the AI chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub provider: AiProvider,
    pub loading: bool,
}

impl ChatState {
    /// Record the user's prompt and mark a request in flight. Returns the
    /// trimmed prompt, or `None` when it is blank or a reply is pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let prompt = input.trim();
        if prompt.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, prompt.to_owned()));
        self.loading = true;
        Some(prompt.to_owned())
    }

    pub fn finish(&mut self, content: String, is_error: bool) {
        let role = if is_error { ChatRole::Error } else { ChatRole::Assistant };
        self.messages.push(ChatMessage::new(role, content));
        self.loading = false;
    }
}
