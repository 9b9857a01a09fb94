//! HTTP transport for the prompt endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the HTTP transport reports
//! [`DeliveryFailure::Unavailable`] since there is no browser `fetch`.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-success statuses and undecodable bodies all surface
//! as [`DeliveryFailure`]. The variants only exist for diagnostics; the
//! widget renders every one of them the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::PromptReply;

/// Path segment the prompt server mounts its single route under.
pub const PROMPT_PATH: &str = "prompt";

/// Failure to obtain a reply for one submitted prompt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryFailure {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The success body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// No HTTP stack is available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Build the request target for `input` against `endpoint`.
///
/// The input is percent-encoded as a single path segment, so `/`, `?`, `#`
/// and friends reach the server as part of the prompt. A draft of exactly
/// `.` or `..` is still a dot segment to the browser's URL parser and gets
/// collapsed, so that request misses the prompt route.
pub fn prompt_target(endpoint: &str, input: &str) -> String {
    format!("{endpoint}/{PROMPT_PATH}/{}", urlencoding::encode(input))
}

/// Something that can resolve a request target into a [`PromptReply`].
///
/// The widget uses [`HttpTransport`]; tests substitute scripted transports.
#[allow(async_fn_in_trait)]
pub trait PromptTransport {
    /// Issue one `GET` to `target` and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryFailure`] for network errors, non-success status
    /// codes, and bodies that do not decode as [`PromptReply`].
    async fn fetch_reply(&self, target: &str) -> Result<PromptReply, DeliveryFailure>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl PromptTransport for HttpTransport {
    async fn fetch_reply(&self, target: &str) -> Result<PromptReply, DeliveryFailure> {
        #[cfg(feature = "csr")]
        {
            log::debug!("GET {target}");
            let resp = gloo_net::http::Request::get(target)
                .send()
                .await
                .map_err(|e| DeliveryFailure::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(DeliveryFailure::Status(resp.status()));
            }
            resp.json::<PromptReply>()
                .await
                .map_err(|e| DeliveryFailure::Parse(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
            Err(DeliveryFailure::Unavailable)
        }
    }
}
