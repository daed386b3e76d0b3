//! US Honeywell thermostats (Total Connect Comfort)

use std::collections::HashMap;
use std::sync::Arc;

use ha_core::{ClimateEntity, TemperatureUnit};
use serde_json::{json, Value};
use tracing::{debug, error};

use super::somecomfort::{SomeComfortClient, UsDevice};

pub use ha_core::climate::ATTR_FAN;
pub const ATTR_FANMODE: &str = "fan_mode";
pub const ATTR_SYSTEM_MODE: &str = "system_mode";

/// System mode in which the cool setpoint is authoritative
const MODE_COOL: &str = "cool";

/// A thermostat of a SomeComfort account
///
/// Holds no state of its own: every read and write goes to the device
/// handle, which caches the last refresh.
pub struct HoneywellUsThermostat {
    client: Arc<dyn SomeComfortClient>,
    device: Box<dyn UsDevice>,
}

impl HoneywellUsThermostat {
    pub fn new(client: Arc<dyn SomeComfortClient>, device: Box<dyn UsDevice>) -> Self {
        Self { client, device }
    }

    pub fn client(&self) -> &Arc<dyn SomeComfortClient> {
        &self.client
    }

    pub fn device_id(&self) -> String {
        self.device.device_id()
    }

    fn is_cooling(&self) -> bool {
        self.device.system_mode() == MODE_COOL
    }
}

impl ClimateEntity for HoneywellUsThermostat {
    fn name(&self) -> String {
        self.device.name()
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_code(&self.device.temperature_unit())
    }

    fn current_temperature(&self) -> Option<f64> {
        Some(self.device.current_temperature())
    }

    fn target_temperature(&self) -> Option<f64> {
        if self.is_cooling() {
            Some(self.device.setpoint_cool())
        } else {
            Some(self.device.setpoint_heat())
        }
    }

    fn current_operation(&self) -> Option<String> {
        Some(self.device.system_mode())
    }

    fn is_fan_on(&self) -> Option<bool> {
        Some(self.device.fan_running())
    }

    fn device_state_attributes(&self) -> HashMap<String, Value> {
        let fan = if self.device.fan_running() {
            "running"
        } else {
            "idle"
        };

        HashMap::from([
            (ATTR_FAN.to_string(), json!(fan)),
            (ATTR_FANMODE.to_string(), json!(self.device.fan_mode())),
            (ATTR_SYSTEM_MODE.to_string(), json!(self.device.system_mode())),
        ])
    }

    /// Write the setpoint of the current mode
    ///
    /// The API rejects setpoints outside the device's range; that is logged
    /// and the previous setpoint stays in effect.
    fn set_temperature(&mut self, temperature: f64) {
        let result = if self.is_cooling() {
            self.device.set_setpoint_cool(temperature)
        } else {
            self.device.set_setpoint_heat(temperature)
        };

        if let Err(err) = result {
            error!("Temperature {:.1} out of range: {}", temperature, err);
        }
    }

    fn set_operation_mode(&mut self, operation_mode: &str) {
        if let Err(err) = self.device.set_system_mode(operation_mode) {
            error!(
                "Failed to set system mode of {} to {}: {}",
                self.device.name(),
                operation_mode,
                err
            );
        }
    }

    fn update(&mut self) {
        debug!("Refreshing honeywell device {}", self.device.device_id());
        if let Err(err) = self.device.refresh() {
            error!("Failed to refresh {}: {}", self.device.name(), err);
        }
    }
}
