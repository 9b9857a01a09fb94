#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::{DeliveryFailure, PromptTransport, prompt_target};
use crate::net::types::PromptReply;

/// Label prepended to every bot reply in the transcript.
pub const AGENT_LABEL: &str = "Agent's response: ";

/// Transcript text appended when a prompt could not be delivered.
pub const DELIVERY_FAILURE_TEXT: &str = "Error: Failed to fetch response from the server.";

/// Who a transcript entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub role: Role,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::Bot }
    }
}

/// A prompt captured from the draft, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Draft value at the moment of submitting, untrimmed.
    pub text: String,
    /// Fully built request URL.
    pub target: String,
}

/// State for the chat widget.
///
/// The transcript only ever grows, except through [`ChatState::clear`].
/// Submitting is split into [`ChatState::prepare_submission`] and
/// [`ChatState::apply_outcome`] so the widget can release its signal while
/// the request is in flight.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub draft: String,
    endpoint: String,
}

impl ChatState {
    /// Create an empty widget state talking to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_owned();
        Self { messages: Vec::new(), draft: String::new(), endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replace the draft verbatim.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Drop every transcript entry.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Capture the draft for sending, or `None` when it is blank.
    pub fn prepare_submission(&self) -> Option<Submission> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(Submission { text: self.draft.clone(), target: prompt_target(&self.endpoint, &self.draft) })
    }

    /// Record the result of a delivered (or failed) submission and reset
    /// the draft.
    pub fn apply_outcome(&mut self, submission: Submission, outcome: Result<PromptReply, DeliveryFailure>) {
        match outcome {
            Ok(reply) => {
                let bot_text = format!("{AGENT_LABEL}{}", reply.reply_text());
                self.messages.push(Message::user(submission.text));
                self.messages.push(Message::bot(bot_text));
            }
            Err(err) => {
                #[cfg(feature = "csr")]
                log::error!("Fetching error: {err} (target {})", submission.target);
                #[cfg(not(feature = "csr"))]
                let _ = err;
                self.messages.push(Message::bot(DELIVERY_FAILURE_TEXT));
            }
        }
        self.draft.clear();
    }

    /// Submit the draft through `transport` and wait for the outcome.
    ///
    /// Returns `false` without touching the transport when the draft is
    /// blank.
    pub async fn submit_with<T: PromptTransport>(&mut self, transport: &T) -> bool {
        let Some(submission) = self.prepare_submission() else {
            return false;
        };
        let outcome = transport.fetch_reply(&submission.target).await;
        self.apply_outcome(submission, outcome);
        true
    }
}
