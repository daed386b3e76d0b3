//! SomeComfort (Total Connect Comfort) client boundary
//!
//! US Honeywell thermostats are reached through the SomeComfort cloud API.
//! The protocol lives outside this crate; the platform only needs the
//! operations below, and tests substitute doubles for them.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a SomeComfort client
#[derive(Debug, Error)]
pub enum SomeComfortError {
    /// Credentials were rejected
    #[error("authentication failed")]
    Auth,

    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),

    /// The API refused the request, e.g. a setpoint outside the device range
    #[error("{0}")]
    Api(String),
}

/// Opens an authenticated SomeComfort session
pub trait SomeComfortConnector: Send + Sync {
    fn connect(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Arc<dyn SomeComfortClient>, SomeComfortError>;
}

/// An authenticated SomeComfort session
pub trait SomeComfortClient: Send + Sync {
    /// Locations of the account with their devices, in account order
    fn locations(&self) -> Vec<UsLocation>;
}

/// A location (house) of a SomeComfort account
pub struct UsLocation {
    pub location_id: String,
    pub devices: Vec<Box<dyn UsDevice>>,
}

impl UsLocation {
    pub fn new(location_id: impl Into<String>, devices: Vec<Box<dyn UsDevice>>) -> Self {
        Self {
            location_id: location_id.into(),
            devices,
        }
    }
}

impl std::fmt::Debug for UsLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsLocation")
            .field("location_id", &self.location_id)
            .field("devices", &self.devices.len())
            .finish()
    }
}

/// Handle to one remote thermostat
///
/// Getters return the values of the last refresh; setters write through to
/// the cloud immediately.
pub trait UsDevice: Send {
    fn device_id(&self) -> String;

    fn name(&self) -> String;

    fn fan_running(&self) -> bool;

    /// `None` for systems without a fan
    fn fan_mode(&self) -> Option<String>;

    fn system_mode(&self) -> String;

    fn current_temperature(&self) -> f64;

    /// Unit code reported by the device: `"F"` or `"C"`
    fn temperature_unit(&self) -> String;

    fn setpoint_heat(&self) -> f64;

    fn setpoint_cool(&self) -> f64;

    fn set_setpoint_heat(&mut self, value: f64) -> Result<(), SomeComfortError>;

    fn set_setpoint_cool(&mut self, value: f64) -> Result<(), SomeComfortError>;

    fn set_system_mode(&mut self, mode: &str) -> Result<(), SomeComfortError>;

    fn refresh(&mut self) -> Result<(), SomeComfortError>;
}
