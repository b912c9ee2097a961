mod chat;
mod config;
mod document;
mod llm_client;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::Document;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (the API key is optional; everything else has defaults)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Chat API v{}", env!("CARGO_PKG_VERSION"));

    // Load the CV document (a missing file degrades to an empty document)
    let document = Document::load(&config.cv_data_path);
    if document.is_empty() {
        warn!("CV document is empty; answers will lack grounding context");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.azure_api_key.clone());
    info!(
        "LLM client initialized (model: {}, available: {})",
        llm_client::MODEL,
        llm.is_available()
    );

    // Build app state
    let state = AppState {
        document,
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the frontend is served cross-origin in dev

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
