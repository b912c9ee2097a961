pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::chat::handlers::handle_chat;
use crate::state::AppState;
use crate::suggestions::handlers::handle_suggestions;

pub fn build_router(state: AppState) -> Router {
    let static_dir = std::path::PathBuf::from(&state.config.static_dir);

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handle_chat))
        .route("/suggestions", get(handle_suggestions));

    // The frontend mount comes after the API routes so it never shadows them
    let router = if static_dir.is_dir() {
        info!("Serving static frontend from {}", static_dir.display());
        router.fallback_service(ServeDir::new(static_dir))
    } else {
        router
    };

    router.with_state(state)
}
