/// LLM Client — the single point of entry for all DeepSeek API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: DeepSeek-V3-0324 on the Azure-hosted OpenAI-compatible endpoint
/// (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://cloudptit.services.ai.azure.com/openai/v1";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "DeepSeek-V3-0324";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("AZURE_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no choices")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    /// DeepSeek reasoning models return the chain of thought here, separate
    /// from `content`.
    reasoning_content: Option<String>,
    tool_calls: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A completion as returned by the vendor, before thinking/answer splitting.
#[derive(Debug, Clone)]
pub struct RawCompletion {
    pub content: String,
    /// The vendor's auxiliary reasoning field (`reasoning_content`), when the
    /// model populated it.
    pub reasoning: Option<String>,
    /// Tool-call structures passed through opaquely.
    pub tool_calls: Option<serde_json::Value>,
}

/// The single LLM client shared by all services.
/// Wraps the OpenAI-compatible chat-completions endpoint. Calls are
/// at-most-once: a failed request is surfaced to the caller, never retried.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!("AZURE_API_KEY not found. DeepSeek API will not be available.");
        }
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Whether a credential was configured. Decided once at construction;
    /// callers use this to degrade to guidance messages instead of erroring.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a single call to the chat-completions endpoint.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<RawCompletion, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatCompletionRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        };

        debug!("Sending request to DeepSeek API");

        let response = self
            .client
            .post(format!("{API_BASE_URL}/chat/completions"))
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message out of the standard error envelope
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let message = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyContent)?
            .message;

        Ok(RawCompletion {
            content: message.content.unwrap_or_default(),
            reasoning: message.reasoning_content,
            tool_calls: message.tool_calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_key_is_unavailable() {
        let client = LlmClient::new(None);
        assert!(!client.is_available());
    }

    #[test]
    fn test_client_with_key_is_available() {
        let client = LlmClient::new(Some("sk-test".to_string()));
        assert!(client.is_available());
    }

    #[test]
    fn test_completion_response_deserializes_reasoning_and_tool_calls() {
        let json = r#"{
            "choices": [
                {
                    "message": {
                        "content": "<answer>B</answer>",
                        "reasoning_content": "chain of thought",
                        "tool_calls": [{"id": "call_1"}]
                    }
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20}
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let message = &parsed.choices[0].message;
        assert_eq!(message.content.as_deref(), Some("<answer>B</answer>"));
        assert_eq!(message.reasoning_content.as_deref(), Some("chain of thought"));
        assert!(message.tool_calls.is_some());
        assert_eq!(parsed.usage.as_ref().unwrap().prompt_tokens, 10);
    }

    #[test]
    fn test_completion_response_tolerates_minimal_message() {
        let json = r#"{"choices": [{"message": {"content": "hi"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let message = &parsed.choices[0].message;
        assert!(message.reasoning_content.is_none());
        assert!(message.tool_calls.is_none());
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn test_api_error_envelope_parses_message() {
        let body = r#"{"error": {"message": "Auth token validation failed"}}"#;
        let parsed: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Auth token validation failed");
    }

    #[test]
    fn test_api_error_display_carries_status() {
        let err = LlmError::Api {
            status: 401,
            message: "bad key".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
