//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [completion]
//! model = "gpt-4o-mini"
//! base_url = "https://api.openai.com/v1"
//! api_key_env = "OPENAI_API_KEY"
//! timeout_seconds = 60
//!
//! [output]
//! format = "text"
//! color = true
//!
//! [form]
//! default_persona = "childcare"
//! show_progress = true
//! ```

use consult_application::CompletionParams;
use consult_domain::{DEFAULT_TEMPERATURE, Model, OutputFormat, Persona};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default endpoint of the completion service
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("completion.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("completion.model cannot be empty")]
    EmptyModelName,

    #[error("completion.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("completion.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("form.default_persona must be \"childcare\" or \"elder-care\", got \"{0}\"")]
    UnknownDefaultPersona(String),
}

/// Raw completion service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Model identifier
    pub model: Model,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Timeout in seconds for one completion call
    pub timeout_seconds: u64,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: 60,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw interactive form configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Persona preselected when the form opens
    pub default_persona: Persona,
    /// Show a spinner while waiting for an answer
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        Self {
            default_persona: Persona::default(),
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub completion: FileCompletionConfig,
    pub output: FileOutputConfig,
    pub form: FileFormConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.completion.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.completion.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.completion.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.completion.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }

        // The fallback persona is for programmatic callers only
        if self.form.default_persona.is_fallback() {
            return Err(ConfigValidationError::UnknownDefaultPersona(
                self.form.default_persona.as_str().to_string(),
            ));
        }

        Ok(())
    }

    /// Completion parameters handed to the use case
    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            model: self.completion.model.clone(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Some(Duration::from_secs(self.completion.timeout_seconds)),
        }
    }
}
