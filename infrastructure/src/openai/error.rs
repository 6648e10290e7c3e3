//! Error types for the OpenAI adapter

use consult_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI adapter operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when calling the Chat Completions API
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("environment variable {var} is not set")]
    MissingApiKey { var: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("response contained no choices")]
    NoChoices,

    #[error("first choice has no text content")]
    MissingContent,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::MissingApiKey { var } => GatewayError::MissingCredential(var),
            OpenAiError::Http(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Status {
                status: 401 | 403,
                message,
            } => GatewayError::Authentication(message),
            OpenAiError::Status {
                status: 429,
                message,
            } => GatewayError::RateLimited(message),
            e @ OpenAiError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            e @ (OpenAiError::ParseError { .. }
            | OpenAiError::NoChoices
            | OpenAiError::MissingContent) => GatewayError::MalformedResponse(e.to_string()),
        }
    }
}
