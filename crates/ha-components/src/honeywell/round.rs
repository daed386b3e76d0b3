//! EU Honeywell "Round" thermostats and the hot water zone (Evohome)

use std::sync::Arc;

use ha_core::{ClimateEntity, TemperatureUnit};
use tracing::{debug, error};

use super::evohome::{EvohomeClient, ZoneTemperature};

/// Name used until the first temperature listing arrives
pub const DEFAULT_NAME: &str = "round connected";

pub const HOT_WATER_NAME: &str = "Hot Water";

/// One Evohome zone
///
/// The Evohome API has no away flag: away mode is a temperature override to
/// the configured away temperature, and the flag is remembered locally.
pub struct RoundThermostat {
    client: Arc<dyn EvohomeClient>,
    zone_id: String,
    /// The primary zone forces the client to refresh; the others read its cache
    primary: bool,
    away_temperature: f64,
    name: String,
    current_temperature: Option<f64>,
    target_temperature: Option<f64>,
    is_hot_water: bool,
    away: bool,
}

impl RoundThermostat {
    /// Create a zone and fetch its current temperatures
    pub fn new(
        client: Arc<dyn EvohomeClient>,
        zone_id: impl Into<String>,
        primary: bool,
        away_temperature: f64,
    ) -> Self {
        let mut thermostat = Self::unfetched(client, zone_id.into(), primary, away_temperature);
        thermostat.update();
        thermostat
    }

    /// Create a zone from a listing the caller already fetched
    pub fn from_zone(
        client: Arc<dyn EvohomeClient>,
        zone: &ZoneTemperature,
        primary: bool,
        away_temperature: f64,
    ) -> Self {
        let mut thermostat =
            Self::unfetched(client, zone.id.clone(), primary, away_temperature);
        thermostat.apply(zone);
        thermostat
    }

    fn unfetched(
        client: Arc<dyn EvohomeClient>,
        zone_id: String,
        primary: bool,
        away_temperature: f64,
    ) -> Self {
        Self {
            client,
            zone_id,
            primary,
            away_temperature,
            name: DEFAULT_NAME.to_string(),
            current_temperature: None,
            target_temperature: None,
            is_hot_water: false,
            away: false,
        }
    }

    fn apply(&mut self, zone: &ZoneTemperature) {
        self.current_temperature = Some(zone.temp);
        self.target_temperature = zone.setpoint;
        self.is_hot_water = zone.is_hot_water();
        self.name = if self.is_hot_water {
            HOT_WATER_NAME.to_string()
        } else {
            zone.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string())
        };
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn away_temperature(&self) -> f64 {
        self.away_temperature
    }

    pub fn is_hot_water(&self) -> bool {
        self.is_hot_water
    }
}

impl ClimateEntity for RoundThermostat {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    /// Hot water has an on/off setpoint only, which isn't a temperature
    fn target_temperature(&self) -> Option<f64> {
        if self.is_hot_water {
            None
        } else {
            self.target_temperature
        }
    }

    fn current_operation(&self) -> Option<String> {
        self.client.system_mode()
    }

    fn is_away_mode_on(&self) -> Option<bool> {
        Some(self.away)
    }

    fn set_temperature(&mut self, temperature: f64) {
        if let Err(err) = self.client.set_temperature(&self.name, temperature) {
            error!("Failed to set temperature of {}: {}", self.name, err);
        }
    }

    fn set_operation_mode(&mut self, operation_mode: &str) {
        if let Err(err) = self.client.set_system_mode(operation_mode) {
            error!("Failed to set evohome system mode to {}: {}", operation_mode, err);
        }
    }

    /// Honeywell's own away mode leaves manual overrides in place, so away is
    /// an explicit override to the away temperature instead.
    fn turn_away_mode_on(&mut self) {
        self.away = true;
        if let Err(err) = self.client.set_temperature(&self.name, self.away_temperature) {
            error!("Failed to turn on away mode for {}: {}", self.name, err);
        }
    }

    fn turn_away_mode_off(&mut self) {
        self.away = false;
        if let Err(err) = self.client.cancel_temp_override(&self.name) {
            error!("Failed to turn off away mode for {}: {}", self.name, err);
        }
    }

    fn update(&mut self) {
        let zones = match self.client.temperatures(self.primary) {
            Ok(zones) => zones,
            Err(err) => {
                error!("Failed to fetch evohome temperatures: {}", err);
                return;
            }
        };

        match zones.iter().find(|zone| zone.id == self.zone_id) {
            Some(zone) => {
                self.apply(zone);
                debug!(
                    "Zone {} ({}) at {:?}, setpoint {:?}",
                    self.zone_id, self.name, self.current_temperature, self.target_temperature
                );
            }
            None => error!(
                "Did not receive temperature data for zone {} from the evohome API",
                self.zone_id
            ),
        }
    }
}
