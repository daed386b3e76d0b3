//! Evohome client boundary
//!
//! EU Honeywell "Round" thermostats and the hot water controller are zones of
//! an Evohome system. The v1 Evohome API addresses zones by name for writes
//! and returns all zones at once for reads.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// `thermostat` value of the domestic hot water zone
pub const DOMESTIC_HOT_WATER: &str = "DOMESTIC_HOT_WATER";

/// Errors raised by an Evohome client
#[derive(Debug, Error)]
pub enum EvohomeError {
    #[error("authentication failed")]
    Auth,

    /// Socket level failure talking to the web service
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),

    #[error("{0}")]
    Api(String),
}

/// One zone of the temperature listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTemperature {
    pub id: String,

    /// Measured temperature
    pub temp: f64,

    #[serde(default)]
    pub setpoint: Option<f64>,

    /// Zone kind, e.g. `EMEA_ZONE` or `DOMESTIC_HOT_WATER`
    pub thermostat: String,

    /// The hot water zone has no name
    #[serde(default)]
    pub name: Option<String>,
}

impl ZoneTemperature {
    pub fn is_hot_water(&self) -> bool {
        self.thermostat == DOMESTIC_HOT_WATER
    }
}

/// Opens an authenticated Evohome session
pub trait EvohomeConnector: Send + Sync {
    fn connect(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Arc<dyn EvohomeClient>, EvohomeError>;
}

/// An authenticated Evohome session, shared by all zones of the account
pub trait EvohomeClient: Send + Sync {
    /// All zones; without `force_refresh` the client may answer from its
    /// last fetch
    fn temperatures(&self, force_refresh: bool) -> Result<Vec<ZoneTemperature>, EvohomeError>;

    /// Override a zone's setpoint until cancelled
    fn set_temperature(&self, zone: &str, temperature: f64) -> Result<(), EvohomeError>;

    fn cancel_temp_override(&self, zone: &str) -> Result<(), EvohomeError>;

    fn system_mode(&self) -> Option<String>;

    fn set_system_mode(&self, mode: &str) -> Result<(), EvohomeError>;
}
