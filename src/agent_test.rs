use super::*;
use crate::llm::types::Completion;
use std::sync::Mutex;

struct RecordingLlm {
    reply: Option<String>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl RecordingLlm {
    fn replying(text: &str) -> Self {
        Self { reply: Some(text.to_owned()), seen: Mutex::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self { reply: None, seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl LlmChat for RecordingLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion, LlmError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Some(text) => Ok(Completion { text: text.clone(), model: "mock".into(), ..Completion::default() }),
            None => Err(LlmError::Status { status: 503, body: "overloaded".into() }),
        }
    }
}

#[tokio::test]
async fn respond_sends_single_user_message() {
    let llm = Arc::new(RecordingLlm::replying("Paris"));
    let agent = Agent::new(llm.clone());

    let reply = agent.respond("capital of France?").await.unwrap();

    assert_eq!(reply, "Paris");
    let seen = llm.seen.lock().unwrap();
    assert_eq!(*seen, vec![vec![ChatMessage::user("capital of France?")]]);
}

#[tokio::test]
async fn respond_carries_no_history_between_calls() {
    let llm = Arc::new(RecordingLlm::replying("ok"));
    let agent = Agent::new(llm.clone());

    agent.respond("first").await.unwrap();
    agent.respond("second").await.unwrap();

    let seen = llm.seen.lock().unwrap();
    assert_eq!(seen[1], vec![ChatMessage::user("second")]);
}

#[tokio::test]
async fn respond_passes_empty_text_through() {
    let agent = Agent::new(Arc::new(RecordingLlm::replying("")));
    assert_eq!(agent.respond("hi").await.unwrap(), "");
}

#[tokio::test]
async fn respond_propagates_provider_errors() {
    let agent = Agent::new(Arc::new(RecordingLlm::failing()));
    let err = agent.respond("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Status { status: 503, .. }));
}
