//! Completion parameters: per-request settings for the completion call.
//!
//! [`CompletionParams`] is handed to
//! [`ConsultExpertUseCase`](crate::use_cases::consult_expert::ConsultExpertUseCase)
//! at construction time so the use case never reads process-wide state.

use consult_domain::{DEFAULT_TEMPERATURE, Model, Temperature};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound on a single completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings applied to every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Model identifier sent with the request.
    pub model: Model,
    /// Sampling temperature. Consultations always use 0.5.
    pub temperature: Temperature,
    /// Upper bound on one call; `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CompletionParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = CompletionParams::default();
        assert_eq!(params.model, Model::Gpt4oMini);
        assert_eq!(params.temperature.value(), 0.5);
        assert_eq!(params.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_builder() {
        let params = CompletionParams::default()
            .with_model(Model::Gpt4o)
            .with_timeout(None);

        assert_eq!(params.model, Model::Gpt4o);
        assert!(params.timeout.is_none());
        assert_eq!(params.temperature, DEFAULT_TEMPERATURE);
    }
}
