//! Prompt route: one prompt in, one model reply out.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::llm::types::LlmError;
use crate::state::AppState;

/// Body of a successful `GET /prompt/{prompt}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Body of a failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Error calling LLM API: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { detail: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `GET /prompt/{prompt}`: forward the decoded path segment to the agent.
///
/// # Errors
///
/// Returns `500` with a `detail` message when the LLM call fails.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(prompt): Path<String>,
) -> Result<Json<PromptResponse>, ApiError> {
    tracing::info!(%prompt, "received prompt");

    let reply = state.agent.respond(&prompt).await.map_err(|e| {
        tracing::warn!(error = %e, "prompt failed");
        ApiError::from(e)
    })?;

    tracing::info!(reply_len = reply.len(), "prompt answered");
    Ok(Json(PromptResponse { prompt: reply }))
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
