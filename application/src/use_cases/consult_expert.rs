//! Consult Expert use case.
//!
//! Forwards one question to the completion service under the selected
//! persona and hands back the answer text exactly as produced.
//!
//! Each call is independent: the prompt is built fresh, sent once, and
//! dropped. A failed call is terminal for that request; nothing is retried.

use crate::config::CompletionParams;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::{ConsultProgressNotifier, NoProgress};
use consult_domain::util::log_preview;
use consult_domain::{ConsultationPrompt, Persona};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a consultation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsultError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for consulting an expert persona.
///
/// Configuration is injected at construction; the use case holds no other
/// state and can be shared across submissions.
#[derive(Clone)]
pub struct ConsultExpertUseCase {
    gateway: Arc<dyn CompletionGateway>,
    params: CompletionParams,
}

impl ConsultExpertUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: CompletionParams) -> Self {
        Self { gateway, params }
    }

    /// Build the request that would be sent for `question` and `persona`.
    pub fn build_request(&self, question: &str, persona: &Persona) -> CompletionRequest {
        let prompt = ConsultationPrompt::new(persona, question);
        CompletionRequest::new(self.params.model.clone(), self.params.temperature, &prompt)
    }

    /// Ask `persona` the given question and return the answer text.
    ///
    /// `question` is not checked for blankness here; callers validate input
    /// before calling.
    pub async fn get_response(
        &self,
        question: &str,
        persona: &Persona,
    ) -> Result<String, ConsultError> {
        self.execute_with_progress(question, persona, &NoProgress)
            .await
    }

    /// Same as [`get_response`](Self::get_response), reporting start and
    /// completion to `progress`.
    pub async fn execute_with_progress(
        &self,
        question: &str,
        persona: &Persona,
        progress: &dyn ConsultProgressNotifier,
    ) -> Result<String, ConsultError> {
        if persona.is_fallback() {
            warn!(
                "Unrecognized persona '{}'; using the generic assistant instruction",
                persona.as_str()
            );
        }

        let request = self.build_request(question, persona);

        info!(
            persona = persona.as_str(),
            model = %self.params.model,
            "Sending consultation"
        );
        debug!(
            "Question ({} bytes): {}",
            question.len(),
            log_preview(question, 80)
        );

        progress.on_request_start(persona, &self.params.model);
        let result = self.send_once(&request).await;
        progress.on_request_complete(result.is_ok());

        match result {
            Ok(answer) => {
                info!("Consultation answered ({} bytes)", answer.len());
                Ok(answer)
            }
            Err(e) => {
                warn!("Consultation failed: {}", e);
                Err(ConsultError::Gateway(e))
            }
        }
    }

    async fn send_once(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        match self.params.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.complete(request))
                .await
                .map_err(|_| GatewayError::Timeout(limit))?,
            None => self.gateway.complete(request).await,
        }
    }
}
