//! Axum route handlers for the suggestions API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::suggestions::suggested_questions;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// GET /suggestions
///
/// Returns suggested questions derived from the CV. Failures are embedded as
/// message strings in the list, never as an error status.
pub async fn handle_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    let suggestions = suggested_questions(&state.document, &state.llm).await;
    Json(SuggestionsResponse { suggestions })
}
