//! Wire types for the prompt endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Reply text shown when the server answers without a usable `prompt` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response from bot";

/// Success body of `GET /prompt/{prompt}`.
///
/// Only `prompt` is read; any other fields the server sends are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PromptReply {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl PromptReply {
    /// The reply to display, falling back when `prompt` is missing, `null`,
    /// or empty.
    pub fn reply_text(&self) -> &str {
        match self.prompt.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_RESPONSE_FALLBACK,
        }
    }
}
