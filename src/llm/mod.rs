//! LLM access for the prompt endpoint.
//!
//! DESIGN
//! ======
//! One provider shape: any OpenAI-compatible `/chat/completions` server,
//! selected by `LLM_OPENAI_BASE_URL`. Handlers only see the [`LlmChat`]
//! trait so tests can swap in canned replies.

pub mod completions;
pub mod config;
pub mod types;

pub use types::LlmChat;
