//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Question cannot be blank")]
    BlankQuestion,

    #[error("Invalid temperature: {0} (expected 0.0..=2.0)")]
    InvalidTemperature(f32),
}

impl DomainError {
    /// Check if this error is the blank-input case
    pub fn is_blank_question(&self) -> bool {
        matches!(self, DomainError::BlankQuestion)
    }
}
