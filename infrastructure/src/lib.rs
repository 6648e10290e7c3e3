//! Infrastructure layer for expert-consult
//!
//! This crate contains the completion service adapter implementing the
//! gateway port from the application layer, plus configuration and
//! credential loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigLoader, ConfigValidationError, FileCompletionConfig, FileConfig,
    FileFormConfig, FileOutputConfig, load_dotenv,
};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::OpenAiGateway,
};
