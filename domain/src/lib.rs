//! Domain layer for expert-consult
//!
//! This crate contains the core value objects of a consultation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Persona**: which expert answers (childcare or elder care). The
//!   persona decides the system instruction sent with the question.
//! - **Question**: the user's free text, forwarded unmodified.
//! - **ConsultationPrompt**: the two-message prompt (system, then user)
//!   built fresh for every request.

pub mod config;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    model::Model,
    persona::Persona,
    question::Question,
    sampling::{DEFAULT_TEMPERATURE, Temperature},
};
pub use prompt::{
    ConsultationPrompt, PersonaPromptTemplate,
    message::{Message, Role},
};
