//! Single-turn prompt agent.
//!
//! Every prompt is answered in isolation: one `user` message, no system
//! prompt, no history.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::llm::types::{ChatMessage, LlmError};

pub struct Agent {
    llm: Arc<dyn LlmChat>,
}

impl Agent {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>) -> Self {
        Self { llm }
    }

    /// Ask the model about `prompt` and return the reply text.
    ///
    /// # Errors
    ///
    /// Propagates any [`LlmError`] from the provider.
    pub async fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        let completion = self.llm.complete(&[ChatMessage::user(prompt)]).await?;
        tracing::debug!(
            model = %completion.model,
            prompt_tokens = completion.prompt_tokens,
            completion_tokens = completion.completion_tokens,
            finish_reason = %completion.finish_reason,
            "llm reply"
        );
        Ok(completion.text)
    }
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
