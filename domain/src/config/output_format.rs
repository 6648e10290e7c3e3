//! Output format value object

use serde::{Deserialize, Serialize};

/// How a submission's outcome is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banners and plain answer text (default)
    #[default]
    Text,
    /// One JSON object per submission
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
