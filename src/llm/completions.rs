//! Client for an OpenAI-compatible `/chat/completions` endpoint.
//!
//! The request carries the configured model and token cap; the reply is
//! decoded into typed structs and reduced to the first choice.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{ChatMessage, Completion, LlmChat, LlmError};

pub struct CompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CompletionClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            url: completions_url(&config.base_url),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for CompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion, LlmError> {
        let body = CompletionRequest { model: &self.model, max_tokens: self.max_tokens, messages };
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(LlmError::Status { status: status.as_u16(), body: text });
        }
        parse_completion(&text)
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

pub(crate) fn parse_completion(json: &str) -> Result<Completion, LlmError> {
    let body: CompletionBody = serde_json::from_str(json).map_err(|e| LlmError::Parse(e.to_string()))?;
    let Some(choice) = body.choices.into_iter().next() else {
        return Err(LlmError::Parse("no choices in completion".into()));
    };
    Ok(Completion {
        text: choice.message.content.unwrap_or_default(),
        model: body.model,
        finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".into()),
        prompt_tokens: body.usage.prompt_tokens,
        completion_tokens: body.usage.completion_tokens,
    })
}

#[cfg(test)]
#[path = "completions_test.rs"]
mod tests;
