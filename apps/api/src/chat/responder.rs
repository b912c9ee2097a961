//! Chat orchestrator — composes the CV document with the user's question,
//! calls the model, and splits the reply.
//!
//! Every path returns a well-formed `ChatResponse`; provider failures degrade
//! to user-facing guidance messages and never propagate to the HTTP layer.

use serde::Serialize;
use tracing::error;

use crate::chat::prompts::{CV_ASSISTANT_SYSTEM, CV_CONTEXT_TEMPLATE};
use crate::chat::splitter::{split_completion, Split};
use crate::document::Document;
use crate::llm_client::{LlmClient, LlmError};

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;

/// Fixed reply when the question is empty.
pub const EMPTY_QUESTION_MESSAGE: &str = "Vui lòng gửi câu hỏi liên quan đến CV.";

/// Fixed reply when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "⚠️ Chưa cấu hình AZURE_API_KEY. Vui lòng thêm API key vào file .env để sử dụng trợ lý AI.\n\nHướng dẫn:\n1. Tạo file .env\n2. Thêm dòng: AZURE_API_KEY=your_key_here\n3. Khởi động lại server";

/// Fixed reply when the provider rejected our credential.
pub const AUTH_ERROR_MESSAGE: &str = "❌ Lỗi xác thực API: API key không hợp lệ hoặc đã hết hạn. Vui lòng kiểm tra lại AZURE_API_KEY trong file .env";

/// Substrings that identify an authentication failure in provider error text.
const AUTH_ERROR_MARKERS: [&str; 3] = ["401", "Auth", "validation failed"];

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub thinking: String,
    pub answer: String,
}

impl ChatResponse {
    fn answer_only(answer: impl Into<String>) -> Self {
        Self {
            thinking: String::new(),
            answer: answer.into(),
        }
    }
}

/// Answers `question` against the CV document.
///
/// The question is trimmed (and lowercased) only for the emptiness check;
/// the original casing is what the model sees.
pub async fn generate_answer(
    document: &Document,
    llm: &LlmClient,
    question: &str,
    include_thinking: bool,
) -> ChatResponse {
    let q = question.trim().to_lowercase();
    if q.is_empty() {
        return ChatResponse::answer_only(EMPTY_QUESTION_MESSAGE);
    }

    if !llm.is_available() {
        return ChatResponse::answer_only(MISSING_KEY_MESSAGE);
    }

    let context = CV_CONTEXT_TEMPLATE
        .replace("{cv_text}", document.text())
        .replace("{question}", question);

    match complete_and_split(llm, &context, include_thinking).await {
        Ok(response) => response,
        Err(e) => {
            let error_msg = e.to_string();
            error!("DeepSeek API failed: {error_msg}");

            if is_auth_error(&error_msg) {
                ChatResponse::answer_only(AUTH_ERROR_MESSAGE)
            } else {
                ChatResponse::answer_only(format!(
                    "❌ Lỗi khi gọi API: {error_msg}. Vui lòng thử lại sau."
                ))
            }
        }
    }
}

/// Calls the model with the CV system prompt and splits the reply into
/// thinking/answer. Shared by chat and the suggestion generator.
pub async fn complete_and_split(
    llm: &LlmClient,
    user_content: &str,
    include_thinking: bool,
) -> Result<ChatResponse, LlmError> {
    let raw = llm
        .complete(CV_ASSISTANT_SYSTEM, user_content, MAX_TOKENS, TEMPERATURE)
        .await?;
    Ok(to_response(split_completion(&raw), include_thinking))
}

fn is_auth_error(message: &str) -> bool {
    AUTH_ERROR_MARKERS.iter().any(|m| message.contains(m))
}

/// Masks the thinking segment when the caller opted out. The answer is
/// always returned as extracted.
fn to_response(split: Split, include_thinking: bool) -> ChatResponse {
    ChatResponse {
        thinking: if include_thinking {
            split.thinking
        } else {
            String::new()
        },
        answer: split.answer,
    }
}
