//! Completion Gateway port
//!
//! Defines the interface for sending a prompt to a hosted completion service.

use async_trait::async_trait;
use consult_domain::{ConsultationPrompt, Message, Model, Temperature};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a completion call
///
/// The presentation layer renders every variant the same way (an error
/// banner with the `Display` text); the variants only make that text precise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("API key not found: set {0} in the environment or in .env")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A single completion request
///
/// Carries exactly the messages of one [`ConsultationPrompt`] plus the
/// model and temperature to sample with.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub temperature: Temperature,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new(model: Model, temperature: Temperature, prompt: &ConsultationPrompt) -> Self {
        Self {
            model,
            temperature,
            messages: prompt.messages().into_iter().cloned().collect(),
        }
    }
}

/// Gateway to the completion service
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one request and return the text of the first choice, unmodified
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{DEFAULT_TEMPERATURE, Persona, Role};

    #[test]
    fn test_request_has_two_messages() {
        let prompt = ConsultationPrompt::new(&Persona::Childcare, "Bedtime tips?");
        let request = CompletionRequest::new(Model::default(), DEFAULT_TEMPERATURE, &prompt);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Bedtime tips?");
    }

    #[test]
    fn test_timeout_display() {
        let err = GatewayError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }
}
