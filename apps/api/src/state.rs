use crate::config::Config;
use crate::document::Document;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup; handlers never write.
#[derive(Clone)]
pub struct AppState {
    pub document: Document,
    pub llm: LlmClient,
    pub config: Config,
}
