//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only holds the prompt agent; the server keeps no per-user state.

use std::sync::Arc;

use crate::agent::Agent;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the agent is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
}

impl AppState {
    #[must_use]
    pub fn new(agent: Agent) -> Self {
        Self { agent: Arc::new(agent) }
    }
}
