//! Model value object representing a completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Completion model identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41Mini,
    Gpt41,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse();
        Ok(model)
    }
}
