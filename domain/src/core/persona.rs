//! Persona value object representing which expert answers

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The expert persona a question is addressed to (Value Object)
///
/// Only [`Persona::Childcare`] and [`Persona::ElderCare`] can be chosen from
/// the form or the command line. [`Persona::Unrecognized`] keeps the
/// generic-assistant fallback reachable for direct callers that pass an
/// arbitrary selector; no UI path produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Persona {
    /// Expert in child-rearing (selector "A")
    Childcare,
    /// Expert in elder care (selector "B")
    ElderCare,
    /// Any other selector; answered by a generic assistant
    Unrecognized(String),
}

impl Persona {
    /// The personas offered by the selector, in display order
    pub fn selectable() -> [Persona; 2] {
        [Persona::Childcare, Persona::ElderCare]
    }

    /// Stable identifier used in config files and JSON output
    pub fn as_str(&self) -> &str {
        match self {
            Persona::Childcare => "childcare",
            Persona::ElderCare => "elder-care",
            Persona::Unrecognized(s) => s,
        }
    }

    /// Human-readable label shown by the selector
    pub fn label(&self) -> &str {
        match self {
            Persona::Childcare => "Childcare expert",
            Persona::ElderCare => "Elder-care expert",
            Persona::Unrecognized(_) => "Assistant",
        }
    }

    /// Whether this persona falls back to the generic assistant
    pub fn is_fallback(&self) -> bool {
        matches!(self, Persona::Unrecognized(_))
    }
}

impl Default for Persona {
    /// Returns the first selectable persona (childcare)
    fn default() -> Self {
        Persona::Childcare
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Persona {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "A" | "childcare" => Persona::Childcare,
            "B" | "elder-care" | "eldercare" => Persona::ElderCare,
            other => Persona::Unrecognized(other.to_string()),
        })
    }
}

impl Serialize for Persona {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(persona) = s.parse();
        Ok(persona)
    }
}
