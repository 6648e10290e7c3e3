//! Consultation form
//!
//! - [`ConsultForm`]: one submission: blank check, then at most one call
//! - [`FormRepl`]: readline-based interactive form
//! - [`QuestionBuffer`]: multi-line question input

mod input;
mod repl;
mod submission;

pub use input::{LineOutcome, QuestionBuffer};
pub use repl::{FormCommand, FormRepl, parse_selection};
pub use submission::{ConsultForm, Submission};
