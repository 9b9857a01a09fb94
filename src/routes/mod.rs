//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is usually served from a different origin than this API, so
//! every route is wrapped in a permissive CORS layer. When a client bundle
//! directory is configured it is served as the fallback.

pub mod prompt;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes: `/prompt/{prompt}` and `/healthz`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/prompt/{prompt}", get(prompt::get_prompt))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes plus the built client bundle at `/`.
pub fn app_with_client(state: AppState, client_dist_dir: &Path) -> Router {
    let client = ServeDir::new(client_dist_dir).append_index_html_on_directories(true);
    app(state).fallback_service(client)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
