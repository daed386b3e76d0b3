//! Honeywell climate platform
//!
//! Supports US thermostats through the SomeComfort (Total Connect Comfort)
//! cloud and EU Round thermostats through Evohome. The vendor clients are
//! injected through [`HoneywellVendors`]; setup either registers every
//! selected device or, on any login/connection failure, nothing at all.

mod config;
mod evohome;
mod round;
mod somecomfort;
mod us;

pub use config::{HoneywellConfig, Region, DEFAULT_AWAY_TEMPERATURE};
pub use evohome::{
    EvohomeClient, EvohomeConnector, EvohomeError, ZoneTemperature, DOMESTIC_HOT_WATER,
};
pub use round::{RoundThermostat, DEFAULT_NAME, HOT_WATER_NAME};
pub use somecomfort::{
    SomeComfortClient, SomeComfortConnector, SomeComfortError, UsDevice, UsLocation,
};
pub use us::{HoneywellUsThermostat, ATTR_FAN, ATTR_FANMODE, ATTR_SYSTEM_MODE};

use std::sync::Arc;

use ha_config::{platform_configs, Value};
use ha_core::{climate, AddEntities, ClimateEntity};
use tracing::{debug, error, info, warn};

/// Platform name under `climate:`
pub const PLATFORM: &str = "honeywell";

/// Vendor client factories the platform logs in with
#[derive(Clone)]
pub struct HoneywellVendors {
    pub somecomfort: Arc<dyn SomeComfortConnector>,
    pub evohome: Arc<dyn EvohomeConnector>,
}

impl HoneywellVendors {
    pub fn new(
        somecomfort: Arc<dyn SomeComfortConnector>,
        evohome: Arc<dyn EvohomeConnector>,
    ) -> Self {
        Self {
            somecomfort,
            evohome,
        }
    }
}

/// Set up the Honeywell platform for one config entry
///
/// Returns `false` when login or the initial fetch fails; nothing is
/// registered in that case.
pub fn setup_platform(
    config: &HoneywellConfig,
    vendors: &HoneywellVendors,
    add_entities: &mut dyn AddEntities,
) -> bool {
    match config.region {
        Region::Us => setup_us(config, vendors.somecomfort.as_ref(), add_entities),
        Region::Eu => setup_round(config, vendors.evohome.as_ref(), add_entities),
    }
}

fn setup_us(
    config: &HoneywellConfig,
    connector: &dyn SomeComfortConnector,
    add_entities: &mut dyn AddEntities,
) -> bool {
    let client = match connector.connect(&config.username, &config.password) {
        Ok(client) => client,
        Err(SomeComfortError::Auth) => {
            error!("Failed to login to honeywell account {}", config.username);
            return false;
        }
        Err(err) => {
            error!("Failed to initialize honeywell client: {}", err);
            return false;
        }
    };

    let location_filter = config.location.as_deref();
    let device_filter = config.thermostat.as_deref();
    let mut entities: Vec<Box<dyn ClimateEntity>> = Vec::new();

    for location in client.locations() {
        if location_filter.is_some_and(|id| id != location.location_id) {
            debug!("Skipping honeywell location {}", location.location_id);
            continue;
        }
        for device in location.devices {
            if device_filter.is_some_and(|id| id != device.device_id()) {
                continue;
            }
            entities.push(Box::new(HoneywellUsThermostat::new(client.clone(), device)));
        }
    }

    if entities.is_empty() {
        warn!("No honeywell thermostats matched for {}", config.username);
    }
    info!("Adding {} honeywell thermostats", entities.len());
    add_entities.add_entities(entities);
    true
}

fn setup_round(
    config: &HoneywellConfig,
    connector: &dyn EvohomeConnector,
    add_entities: &mut dyn AddEntities,
) -> bool {
    let fetched = connector
        .connect(&config.username, &config.password)
        .and_then(|client| Ok((client.temperatures(true)?, client)));

    let (zones, client) = match fetched {
        Ok(fetched) => fetched,
        Err(EvohomeError::Auth) => {
            error!("Failed to login to honeywell evohome account {}", config.username);
            return false;
        }
        Err(err) => {
            error!(
                "Connection error logging into the honeywell evohome web service: {}",
                err
            );
            return false;
        }
    };

    info!("Adding {} honeywell evohome zones", zones.len());
    for (index, zone) in zones.iter().enumerate() {
        let thermostat: Box<dyn ClimateEntity> = Box::new(RoundThermostat::from_zone(
            client.clone(),
            zone,
            index == 0,
            config.away_temperature,
        ));
        add_entities.add_entities(vec![thermostat]);
    }
    true
}

/// Set up every `honeywell` entry of the `climate` section
///
/// Entries that fail validation or setup are logged and skipped. Returns the
/// number of entries set up.
pub fn setup_from_config(
    root: &Value,
    vendors: &HoneywellVendors,
    add_entities: &mut dyn AddEntities,
) -> usize {
    let mut set_up = 0;

    for entry in platform_configs(root, climate::DOMAIN, PLATFORM) {
        let config = match HoneywellConfig::from_yaml(&entry) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                continue;
            }
        };
        if setup_platform(&config, vendors, add_entities) {
            set_up += 1;
        }
    }

    set_up
}
