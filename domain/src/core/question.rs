//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to put to an expert (Value Object)
///
/// Holds the user's text exactly as typed. Only the blank check is applied;
/// surrounding whitespace is kept so the completion service sees the
/// literal input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if Self::is_blank(&content) {
            Err(DomainError::BlankQuestion)
        } else {
            Ok(Self { content })
        }
    }

    /// Whether `text` would be rejected as blank
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
