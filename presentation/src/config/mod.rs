//! Presentation-level configuration
//!
//! Configuration for output formatting and the interactive form.

use consult_domain::{OutputFormat, Persona};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Text banners or JSON
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting to all terminal output of this process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// Interactive form configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Persona selected when the form opens
    pub default_persona: Persona,
    /// Show a spinner while waiting for an answer
    pub show_progress: bool,
    /// Path to history file; defaults to the platform data dir
    pub history_file: Option<PathBuf>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_persona: Persona::default(),
            show_progress: true,
            history_file: None,
        }
    }
}

impl FormConfig {
    /// History file location, falling back to `<data dir>/expert-consult/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("expert-consult").join("history.txt"))
        })
    }
}
