//! Climate entity model
//!
//! A climate platform hands the host one [`ClimateEntity`] per thermostat.
//! Reads come straight from the entity (which usually mirrors a remote
//! device); writes are fire-and-forget calls into the vendor client.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::{EntityId, EntityIdError, State, TemperatureUnit, STATE_UNKNOWN};

/// Entity domain for thermostats
pub const DOMAIN: &str = "climate";

pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";
pub const ATTR_UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";
pub const ATTR_CURRENT_TEMPERATURE: &str = "current_temperature";
pub const ATTR_TEMPERATURE: &str = "temperature";
pub const ATTR_OPERATION_MODE: &str = "operation_mode";
pub const ATTR_AWAY_MODE: &str = "away_mode";
pub const ATTR_FAN: &str = "fan";

/// A thermostat exposed to the host
///
/// Optional capabilities (away mode, fan) report `None` when the device has
/// no notion of them; their setters default to no-ops.
pub trait ClimateEntity: Send {
    fn name(&self) -> String;

    fn temperature_unit(&self) -> TemperatureUnit;

    fn current_temperature(&self) -> Option<f64>;

    /// Setpoint currently in effect, `None` when the device has none
    fn target_temperature(&self) -> Option<f64>;

    fn current_operation(&self) -> Option<String>;

    fn is_away_mode_on(&self) -> Option<bool> {
        None
    }

    fn is_fan_on(&self) -> Option<bool> {
        None
    }

    /// Platform specific attributes, merged over the standard ones
    fn device_state_attributes(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    fn set_temperature(&mut self, temperature: f64);

    fn set_operation_mode(&mut self, operation_mode: &str);

    fn turn_away_mode_on(&mut self) {}

    fn turn_away_mode_off(&mut self) {}

    /// Pull fresh data from the remote device
    fn update(&mut self) {}

    /// Entity ID derived from the display name
    fn entity_id(&self) -> Result<EntityId, EntityIdError> {
        EntityId::from_name(DOMAIN, &self.name())
    }

    /// Snapshot of the entity as the host would record it
    fn state(&self) -> Result<State, EntityIdError> {
        let operation = self.current_operation();
        let mut attributes = HashMap::new();

        attributes.insert(ATTR_FRIENDLY_NAME.to_string(), json!(self.name()));
        attributes.insert(
            ATTR_UNIT_OF_MEASUREMENT.to_string(),
            json!(self.temperature_unit().symbol()),
        );
        attributes.insert(
            ATTR_CURRENT_TEMPERATURE.to_string(),
            json!(self.current_temperature()),
        );
        attributes.insert(ATTR_TEMPERATURE.to_string(), json!(self.target_temperature()));
        if let Some(operation) = &operation {
            attributes.insert(ATTR_OPERATION_MODE.to_string(), json!(operation));
        }
        if let Some(away) = self.is_away_mode_on() {
            attributes.insert(ATTR_AWAY_MODE.to_string(), json!(on_off(away)));
        }
        if let Some(fan) = self.is_fan_on() {
            attributes.insert(ATTR_FAN.to_string(), json!(on_off(fan)));
        }
        attributes.extend(self.device_state_attributes());

        Ok(State::new(
            self.entity_id()?,
            operation.unwrap_or_else(|| STATE_UNKNOWN.to_string()),
            attributes,
        ))
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
