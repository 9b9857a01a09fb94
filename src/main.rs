mod agent;
mod config;
mod llm;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    // The agent is the whole service, so a missing key is fatal.
    let llm_config = llm::config::LlmConfig::from_env().expect("LLM config required");
    let llm = llm::completions::CompletionClient::new(&llm_config).expect("LLM client init failed");
    tracing::info!(model = llm.model(), base_url = %llm_config.base_url, "LLM client initialized");

    let agent = agent::Agent::new(Arc::new(llm));
    let state = state::AppState::new(agent);

    let app = match &config.client_dist_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving client bundle");
            routes::app_with_client(state, dir)
        }
        None => routes::app(state),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "chatbot listening");
    axum::serve(listener, app).await.expect("server failed");
}
