//! Axum route handlers for the chat API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::chat::responder::{generate_answer, ChatResponse};
use crate::state::AppState;

fn default_include_thinking() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default = "default_include_thinking")]
    pub include_thinking: bool,
}

/// POST /chat
///
/// Answers a question about the CV, with the model's thinking trace when
/// requested. Failures degrade to guidance messages inside a 200 payload;
/// this endpoint never surfaces an error status to the UI.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = generate_answer(
        &state.document,
        &state.llm,
        &request.question,
        request.include_thinking,
    )
    .await;

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_thinking_defaults_to_true() {
        let request: ChatRequest = serde_json::from_str(r#"{"question": "kỹ năng?"}"#).unwrap();
        assert!(request.include_thinking);
        assert_eq!(request.question, "kỹ năng?");
    }

    #[test]
    fn test_include_thinking_can_be_disabled() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"question": "q", "include_thinking": false}"#).unwrap();
        assert!(!request.include_thinking);
    }
}
