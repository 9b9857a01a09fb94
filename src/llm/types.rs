//! Shared LLM types: chat messages, completions, and the `LlmChat` seam.

use serde::{Deserialize, Serialize};

/// Errors produced while asking the model for a completion.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The variable named by `LLM_API_KEY_ENV` is unset or empty.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The completion request never produced a response.
    #[error("API request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The provider body was not a chat completion.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

/// One chat turn sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

/// The model's answer plus usage bookkeeping for logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Assistant text; empty when the model returned `null` content.
    pub text: String,
    pub model: String,
    pub finish_reason: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// Anything that can turn a conversation into a completion. Enables mocking
/// in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the reply is malformed.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
