//! Sampling temperature value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Temperature every consultation is sampled at
pub const DEFAULT_TEMPERATURE: Temperature = Temperature(0.5);

/// Sampling temperature sent with a completion request
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Temperature(f32);

impl Temperature {
    pub fn new(value: f32) -> Result<Self, DomainError> {
        if (0.0..=2.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidTemperature(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        DEFAULT_TEMPERATURE
    }
}

impl TryFrom<f32> for Temperature {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Temperature::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(t: Temperature) -> f32 {
        t.0
    }
}
