use super::*;
use std::sync::Arc;

use crate::agent::Agent;
use crate::llm::LlmChat;
use crate::llm::types::{ChatMessage, Completion};

struct FixedLlm(Result<&'static str, u16>);

#[async_trait::async_trait]
impl LlmChat for FixedLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion, LlmError> {
        match self.0 {
            Ok(prefix) => Ok(Completion { text: format!("{prefix}{}", messages[0].content), ..Completion::default() }),
            Err(status) => Err(LlmError::Status { status, body: String::new() }),
        }
    }
}

fn state_with(llm: FixedLlm) -> AppState {
    AppState::new(Agent::new(Arc::new(llm)))
}

#[tokio::test]
async fn get_prompt_returns_reply_under_prompt_field() {
    let state = state_with(FixedLlm(Ok("echo: ")));

    let Json(body) = get_prompt(State(state), Path("hello there".to_owned()))
        .await
        .unwrap();

    assert_eq!(body, PromptResponse { prompt: "echo: hello there".into() });
}

#[tokio::test]
async fn get_prompt_failure_maps_to_500_with_detail() {
    let state = state_with(FixedLlm(Err(503)));

    let err = get_prompt(State(state), Path("hi".to_owned()))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Error calling LLM API: API response error: status 503");
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn prompt_response_serializes_as_prompt_object() {
    let json = serde_json::to_value(PromptResponse { prompt: "hi".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "prompt": "hi" }));
}
