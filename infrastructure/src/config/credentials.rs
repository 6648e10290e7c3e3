//! API key lookup
//!
//! The key comes from the process environment. A `.env` file in the working
//! directory (or a parent) is loaded once at startup so the key can live
//! there instead of the shell profile.

use std::path::PathBuf;
use tracing::debug;

/// Load `.env` into the process environment, if one can be found.
///
/// Variables already set in the environment are not overwritten.
/// Returns the path of the loaded file.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenv::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            debug!("No .env loaded: {}", e);
            None
        }
    }
}

/// Completion service credential
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Read the key from environment variable `var`
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
