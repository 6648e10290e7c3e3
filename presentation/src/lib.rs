//! Presentation layer for expert-consult
//!
//! This crate contains CLI definitions, the interactive consultation form,
//! output formatters and the busy indicator.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg, PersonaArg};
pub use config::{FormConfig, OutputConfig};
pub use form::{ConsultForm, FormRepl, Submission};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SpinnerProgress;
