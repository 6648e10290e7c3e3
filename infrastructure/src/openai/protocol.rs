//! Chat Completions wire types
//!
//! Only the fields this client sends or reads are modelled; unknown response
//! fields are ignored.

use super::error::{OpenAiError, Result};
use consult_application::CompletionRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            temperature: request.temperature.value(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// `{"error": {"message": "..."}}` body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl ChatCompletionResponse {
    /// Parse a response body
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| OpenAiError::ParseError {
            error: e.to_string(),
            raw: raw.to_string(),
        })
    }

    /// Text content of the first choice, unmodified
    pub fn into_first_text(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::NoChoices)?;
        choice.message.content.ok_or(OpenAiError::MissingContent)
    }
}

/// Human-readable message for an error body, falling back to the raw text
pub fn error_message(raw: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(raw) {
        Ok(body) => body.error.message,
        Err(_) if raw.trim().is_empty() => "empty response body".to_string(),
        Err(_) => raw.trim().to_string(),
    }
}
