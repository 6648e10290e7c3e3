//! Submission controller
//!
//! Validates the question, runs the consultation, and turns the result into
//! exactly one displayable outcome.

use consult_application::{ConsultExpertUseCase, ConsultProgressNotifier, NoProgress};
use consult_domain::{Persona, Question};
use serde::Serialize;
use tracing::debug;

/// Outcome of one press of "submit"
///
/// The three variants are mutually exclusive: an answer is never shown
/// together with a warning or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    /// The expert answered; `answer` is the service text, unmodified
    Answered { persona: Persona, answer: String },
    /// The question was empty or whitespace; nothing was sent
    BlankQuestion,
    /// The call failed; `message` is the error description
    Failed { persona: Persona, message: String },
}

impl Submission {
    /// Process exit status for one-shot mode
    pub fn exit_code(&self) -> u8 {
        match self {
            Submission::Answered { .. } => 0,
            Submission::Failed { .. } => 1,
            Submission::BlankQuestion => 2,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Submission::Answered { .. })
    }
}

/// The form's submit action
#[derive(Clone)]
pub struct ConsultForm {
    use_case: ConsultExpertUseCase,
}

impl ConsultForm {
    pub fn new(use_case: ConsultExpertUseCase) -> Self {
        Self { use_case }
    }

    /// Submit without progress reporting
    pub async fn submit(&self, question: &str, persona: &Persona) -> Submission {
        self.submit_with_progress(question, persona, &NoProgress)
            .await
    }

    /// Check the question and, if it is not blank, consult `persona` once
    pub async fn submit_with_progress(
        &self,
        question: &str,
        persona: &Persona,
        progress: &dyn ConsultProgressNotifier,
    ) -> Submission {
        let question = match Question::try_new(question) {
            Ok(q) => q,
            Err(e) => {
                debug!("Submission rejected: {}", e);
                return Submission::BlankQuestion;
            }
        };

        match self
            .use_case
            .execute_with_progress(question.content(), persona, progress)
            .await
        {
            Ok(answer) => Submission::Answered {
                persona: persona.clone(),
                answer,
            },
            Err(e) => Submission::Failed {
                persona: persona.clone(),
                message: e.to_string(),
            },
        }
    }
}
