//! `climate: - platform: honeywell` configuration

use ha_config::{coerce_float, optional_id, validate_platform_config, ConfigResult, Value};
use serde::Deserialize;
use std::fmt;

use super::PLATFORM;

pub const DEFAULT_AWAY_TEMPERATURE: f64 = 16.0;

/// Which vendor cloud the account lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Total Connect Comfort (SomeComfort)
    Us,
    /// Evohome
    #[default]
    Eu,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => f.write_str("us"),
            Region::Eu => f.write_str("eu"),
        }
    }
}

/// Honeywell platform configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HoneywellConfig {
    pub username: String,

    pub password: String,

    #[serde(default)]
    pub region: Region,

    /// Setback temperature used for away mode (EU only)
    #[serde(
        default = "default_away_temperature",
        deserialize_with = "coerce_float"
    )]
    pub away_temperature: f64,

    /// Only set up devices of this location (US only)
    #[serde(default, deserialize_with = "optional_id")]
    pub location: Option<String>,

    /// Only set up this device (US only)
    #[serde(default, deserialize_with = "optional_id")]
    pub thermostat: Option<String>,
}

fn default_away_temperature() -> f64 {
    DEFAULT_AWAY_TEMPERATURE
}

impl HoneywellConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>, region: Region) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            region,
            away_temperature: DEFAULT_AWAY_TEMPERATURE,
            location: None,
            thermostat: None,
        }
    }

    /// Validate a platform entry from `configuration.yaml`
    pub fn from_yaml(value: &Value) -> ConfigResult<Self> {
        validate_platform_config(PLATFORM, value)
    }
}
