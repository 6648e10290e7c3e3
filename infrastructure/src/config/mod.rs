//! Configuration loading for expert-consult
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CONSULT_*` environment variables (e.g. `CONSULT_COMPLETION__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./consult.toml` or `./.consult.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/expert-consult/config.toml`
//! 5. Default values
//!
//! Command line flags are applied on top by the binary.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{ApiKey, load_dotenv};
pub use file_config::{
    ConfigValidationError, FileCompletionConfig, FileConfig, FileFormConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
