//! Core domain concepts shared across all layers.
//!
//! - [`persona::Persona`]: which expert the question is addressed to
//! - [`question::Question`]: a validated, non-blank question
//! - [`model::Model`]: completion model identifier
//! - [`sampling::Temperature`]: sampling temperature (fixed at 0.5)
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod persona;
pub mod question;
pub mod sampling;
