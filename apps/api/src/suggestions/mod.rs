//! Suggestion generator — asks the model for candidate questions about the
//! CV and parses the JSON array out of its free-text reply.
//!
//! Like chat, this never errors outward: parse failures and provider errors
//! become fixed two-line message pairs in the normal payload, so callers must
//! not assume every returned string is an actual question.

pub mod handlers;
pub mod prompts;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use crate::chat::responder::complete_and_split;
use crate::document::Document;
use crate::llm_client::LlmClient;

/// Upper bound on returned suggestions.
const MAX_SUGGESTIONS: usize = 10;
/// Minimum array length accepted from the model.
const MIN_SUGGESTIONS: usize = 5;

static JSON_ARRAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

const MISSING_KEY_MESSAGES: [&str; 2] = [
    "⚠️ Chưa cấu hình API key. Không thể tạo câu hỏi gợi ý.",
    "Vui lòng thêm AZURE_API_KEY vào file .env để sử dụng tính năng này.",
];

const INVALID_FORMAT_MESSAGES: [&str; 2] = [
    "❌ Lỗi: Không thể tạo câu hỏi gợi ý (định dạng không hợp lệ)",
    "Vui lòng thử lại sau.",
];

const AUTH_ERROR_MESSAGES: [&str; 2] = [
    "❌ Lỗi xác thực API: API key không hợp lệ",
    "Vui lòng kiểm tra lại AZURE_API_KEY trong file .env",
];

const RETRY_MESSAGE: &str = "Vui lòng thử lại sau.";

/// Generates up to [`MAX_SUGGESTIONS`] suggested questions from the CV.
pub async fn suggested_questions(document: &Document, llm: &LlmClient) -> Vec<String> {
    if !llm.is_available() {
        return message_pair(&MISSING_KEY_MESSAGES);
    }

    let prompt = prompts::SUGGESTIONS_PROMPT_TEMPLATE.replace("{cv_text}", document.text());

    match complete_and_split(llm, &prompt, false).await {
        Ok(response) => match extract_suggestions(&response.answer) {
            Some(suggestions) => {
                info!("Generated {} suggestions from LLM", suggestions.len());
                suggestions
            }
            None => {
                error!("LLM response format invalid");
                message_pair(&INVALID_FORMAT_MESSAGES)
            }
        },
        Err(e) => {
            let error_msg = e.to_string();
            error!("Failed to generate suggestions from LLM: {error_msg}");

            if error_msg.contains("401") || error_msg.contains("Auth") {
                message_pair(&AUTH_ERROR_MESSAGES)
            } else {
                vec![
                    format!("❌ Lỗi khi tạo gợi ý: {error_msg}"),
                    RETRY_MESSAGE.to_string(),
                ]
            }
        }
    }
}

/// Pulls the first bracket-delimited substring out of the model's reply and
/// parses it as a string array. Accepts only arrays of at least
/// [`MIN_SUGGESTIONS`] entries, truncated to [`MAX_SUGGESTIONS`].
fn extract_suggestions(answer: &str) -> Option<Vec<String>> {
    let array_text = JSON_ARRAY_RE.find(answer)?.as_str();
    let suggestions: Vec<String> = serde_json::from_str(array_text).ok()?;

    if suggestions.len() < MIN_SUGGESTIONS {
        return None;
    }

    Some(suggestions.into_iter().take(MAX_SUGGESTIONS).collect())
}

fn message_pair(messages: &[&str; 2]) -> Vec<String> {
    messages.iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_array_embedded_in_prose() {
        let answer = r#"Đây là các câu hỏi gợi ý:
["Kỹ năng AI của Phong là gì?", "Phong học ở đâu?", "Dự án nổi bật?", "Mục tiêu nghề nghiệp?", "Kinh nghiệm làm việc?"]
Hy vọng hữu ích!"#;

        let suggestions = extract_suggestions(answer).unwrap();
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0], "Kỹ năng AI của Phong là gì?");
    }

    #[test]
    fn test_extract_truncates_to_ten() {
        let items: Vec<String> = (1..=12).map(|i| format!("\"câu hỏi {i}\"")).collect();
        let answer = format!("[{}]", items.join(", "));

        let suggestions = extract_suggestions(&answer).unwrap();
        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[9], "câu hỏi 10");
    }

    #[test]
    fn test_extract_rejects_short_arrays() {
        let answer = r#"["a", "b", "c", "d"]"#;
        assert!(extract_suggestions(answer).is_none());
    }

    #[test]
    fn test_extract_rejects_missing_array() {
        assert!(extract_suggestions("no array here at all").is_none());
    }

    #[test]
    fn test_extract_rejects_non_string_entries() {
        let answer = "[1, 2, 3, 4, 5]";
        assert!(extract_suggestions(answer).is_none());
    }

    #[test]
    fn test_extract_handles_multiline_arrays() {
        let answer = "[\n\"a\",\n\"b\",\n\"c\",\n\"d\",\n\"e\",\n\"f\"\n]";
        let suggestions = extract_suggestions(answer).unwrap();
        assert_eq!(suggestions.len(), 6);
    }

    #[tokio::test]
    async fn test_missing_key_returns_fixed_message_pair() {
        let llm = LlmClient::new(None);
        let doc = Document::empty();

        let suggestions = suggested_questions(&doc, &llm).await;
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], MISSING_KEY_MESSAGES[0]);
        assert_eq!(suggestions[1], MISSING_KEY_MESSAGES[1]);
    }
}
