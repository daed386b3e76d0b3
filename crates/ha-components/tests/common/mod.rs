//! Test doubles for the Honeywell vendor clients
//!
//! Each double records the calls it receives and shares its state through an
//! `Arc<Mutex<_>>`, so a test can keep a handle after the platform has taken
//! ownership of the boxed device or client.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use ha_components::honeywell::{
    EvohomeClient, EvohomeConnector, EvohomeError, HoneywellVendors, SomeComfortClient,
    SomeComfortConnector, SomeComfortError, UsDevice, UsLocation, ZoneTemperature,
};
use ha_core::{AddEntities, ClimateEntity};

// =============================================================================
// Host
// =============================================================================

/// Collects registered entities, keeping track of each registration call
#[derive(Default)]
pub struct EntityCollector {
    entities: Vec<Box<dyn ClimateEntity>>,
    calls: usize,
}

impl EntityCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the platform called back
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn entities(&self) -> &[Box<dyn ClimateEntity>] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Box<dyn ClimateEntity>] {
        &mut self.entities
    }

    pub fn names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl AddEntities for EntityCollector {
    fn add_entities(&mut self, entities: Vec<Box<dyn ClimateEntity>>) {
        self.calls += 1;
        self.entities.extend(entities);
    }
}

// =============================================================================
// SomeComfort
// =============================================================================

/// Remote state of a mock US thermostat
#[derive(Debug, Clone)]
pub struct DeviceData {
    pub device_id: String,
    pub name: String,
    pub fan_running: bool,
    pub fan_mode: Option<String>,
    pub system_mode: String,
    pub current_temperature: f64,
    pub temperature_unit: String,
    pub setpoint_heat: f64,
    pub setpoint_cool: f64,
    /// Make every setpoint write fail like an out-of-range request
    pub reject_setpoints: bool,
    /// Make mode changes and refreshes fail with a dropped connection
    pub offline: bool,
    pub refreshes: usize,
}

#[derive(Debug, Clone)]
pub struct MockDevice {
    data: Arc<Mutex<DeviceData>>,
}

impl MockDevice {
    /// A heating thermostat at 72°F, named after its id
    pub fn new(device_id: &str) -> Self {
        Self {
            data: Arc::new(Mutex::new(DeviceData {
                device_id: device_id.to_string(),
                name: device_id.to_string(),
                fan_running: true,
                fan_mode: Some("auto".to_string()),
                system_mode: "heat".to_string(),
                current_temperature: 72.0,
                temperature_unit: "F".to_string(),
                setpoint_heat: 65.0,
                setpoint_cool: 78.0,
                reject_setpoints: false,
                offline: false,
                refreshes: 0,
            })),
        }
    }

    pub fn data(&self) -> DeviceData {
        self.data.lock().unwrap().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut DeviceData)) {
        f(&mut self.data.lock().unwrap());
    }

    pub fn boxed(&self) -> Box<dyn UsDevice> {
        Box::new(self.clone())
    }
}

impl UsDevice for MockDevice {
    fn device_id(&self) -> String {
        self.data().device_id
    }

    fn name(&self) -> String {
        self.data().name
    }

    fn fan_running(&self) -> bool {
        self.data().fan_running
    }

    fn fan_mode(&self) -> Option<String> {
        self.data().fan_mode
    }

    fn system_mode(&self) -> String {
        self.data().system_mode
    }

    fn current_temperature(&self) -> f64 {
        self.data().current_temperature
    }

    fn temperature_unit(&self) -> String {
        self.data().temperature_unit
    }

    fn setpoint_heat(&self) -> f64 {
        self.data().setpoint_heat
    }

    fn setpoint_cool(&self) -> f64 {
        self.data().setpoint_cool
    }

    fn set_setpoint_heat(&mut self, value: f64) -> Result<(), SomeComfortError> {
        let mut data = self.data.lock().unwrap();
        if data.reject_setpoints {
            return Err(SomeComfortError::Api(format!("setpoint {} out of range", value)));
        }
        data.setpoint_heat = value;
        Ok(())
    }

    fn set_setpoint_cool(&mut self, value: f64) -> Result<(), SomeComfortError> {
        let mut data = self.data.lock().unwrap();
        if data.reject_setpoints {
            return Err(SomeComfortError::Api(format!("setpoint {} out of range", value)));
        }
        data.setpoint_cool = value;
        Ok(())
    }

    fn set_system_mode(&mut self, mode: &str) -> Result<(), SomeComfortError> {
        let mut data = self.data.lock().unwrap();
        if data.offline {
            return Err(connection_dropped().into());
        }
        data.system_mode = mode.to_string();
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), SomeComfortError> {
        let mut data = self.data.lock().unwrap();
        if data.offline {
            return Err(connection_dropped().into());
        }
        data.refreshes += 1;
        Ok(())
    }
}

/// A SomeComfort account: locations in order, each with its devices
#[derive(Debug, Default)]
pub struct MockSomeComfort {
    pub locations: Vec<(String, Vec<MockDevice>)>,
}

impl MockSomeComfort {
    pub fn new(locations: Vec<(&str, Vec<MockDevice>)>) -> Self {
        Self {
            locations: locations
                .into_iter()
                .map(|(id, devices)| (id.to_string(), devices))
                .collect(),
        }
    }
}

impl SomeComfortClient for MockSomeComfort {
    fn locations(&self) -> Vec<UsLocation> {
        self.locations
            .iter()
            .map(|(id, devices)| {
                UsLocation::new(id.clone(), devices.iter().map(MockDevice::boxed).collect())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailure {
    Auth,
    Connection,
    Api,
}

pub struct MockSomeComfortConnector {
    pub client: Arc<MockSomeComfort>,
    pub failure: Option<ConnectFailure>,
    pub logins: Mutex<Vec<(String, String)>>,
}

impl MockSomeComfortConnector {
    pub fn new(client: MockSomeComfort) -> Self {
        Self {
            client: Arc::new(client),
            failure: None,
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: ConnectFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(MockSomeComfort::default())
        }
    }

    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }
}

impl SomeComfortConnector for MockSomeComfortConnector {
    fn connect(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Arc<dyn SomeComfortClient>, SomeComfortError> {
        self.logins
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));

        match self.failure {
            Some(ConnectFailure::Auth) => Err(SomeComfortError::Auth),
            Some(ConnectFailure::Connection) => Err(connection_dropped().into()),
            Some(ConnectFailure::Api) => Err(SomeComfortError::Api("server error".to_string())),
            None => Ok(self.client.clone() as Arc<dyn SomeComfortClient>),
        }
    }
}

// =============================================================================
// Evohome
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum EvohomeCall {
    Temperatures { force_refresh: bool },
    SetTemperature { zone: String, temperature: f64 },
    CancelTempOverride { zone: String },
    SetSystemMode { mode: String },
}

#[derive(Debug, Default)]
pub struct MockEvohome {
    pub zones: Mutex<Vec<ZoneTemperature>>,
    pub system_mode: Mutex<Option<String>>,
    /// Make `temperatures` fail with a socket error
    pub socket_error: Mutex<bool>,
    /// Make overrides and mode changes fail with an API error
    pub rejecting: Mutex<bool>,
    pub calls: Mutex<Vec<EvohomeCall>>,
}

impl MockEvohome {
    pub fn new(zones: Vec<ZoneTemperature>) -> Self {
        Self {
            zones: Mutex::new(zones),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<EvohomeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_with_socket_error(&self) {
        *self.socket_error.lock().unwrap() = true;
    }

    pub fn reject_commands(&self) {
        *self.rejecting.lock().unwrap() = true;
    }

    fn record(&self, call: EvohomeCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn command_result(&self) -> Result<(), EvohomeError> {
        if *self.rejecting.lock().unwrap() {
            return Err(EvohomeError::Api("command rejected".to_string()));
        }
        Ok(())
    }
}

impl EvohomeClient for MockEvohome {
    fn temperatures(&self, force_refresh: bool) -> Result<Vec<ZoneTemperature>, EvohomeError> {
        self.record(EvohomeCall::Temperatures { force_refresh });
        if *self.socket_error.lock().unwrap() {
            return Err(connection_dropped().into());
        }
        Ok(self.zones.lock().unwrap().clone())
    }

    fn set_temperature(&self, zone: &str, temperature: f64) -> Result<(), EvohomeError> {
        self.record(EvohomeCall::SetTemperature {
            zone: zone.to_string(),
            temperature,
        });
        self.command_result()
    }

    fn cancel_temp_override(&self, zone: &str) -> Result<(), EvohomeError> {
        self.record(EvohomeCall::CancelTempOverride {
            zone: zone.to_string(),
        });
        self.command_result()
    }

    fn system_mode(&self) -> Option<String> {
        self.system_mode.lock().unwrap().clone()
    }

    fn set_system_mode(&self, mode: &str) -> Result<(), EvohomeError> {
        self.record(EvohomeCall::SetSystemMode {
            mode: mode.to_string(),
        });
        self.command_result()?;
        *self.system_mode.lock().unwrap() = Some(mode.to_string());
        Ok(())
    }
}

pub struct MockEvohomeConnector {
    pub client: Arc<MockEvohome>,
    pub auth_fails: bool,
    pub logins: Mutex<Vec<(String, String)>>,
}

impl MockEvohomeConnector {
    pub fn new(client: Arc<MockEvohome>) -> Self {
        Self {
            client,
            auth_fails: false,
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }
}

impl EvohomeConnector for MockEvohomeConnector {
    fn connect(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Arc<dyn EvohomeClient>, EvohomeError> {
        self.logins
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));

        if self.auth_fails {
            return Err(EvohomeError::Auth);
        }
        Ok(self.client.clone() as Arc<dyn EvohomeClient>)
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn connection_dropped() -> io::Error {
    io::Error::new(io::ErrorKind::ConnectionReset, "socket error")
}

pub fn zone(
    id: &str,
    temp: f64,
    setpoint: f64,
    thermostat: &str,
    name: Option<&str>,
) -> ZoneTemperature {
    ZoneTemperature {
        id: id.to_string(),
        temp,
        setpoint: Some(setpoint),
        thermostat: thermostat.to_string(),
        name: name.map(str::to_string),
    }
}

/// A heating zone named "House" and the hot water zone
pub fn house_and_hot_water() -> Vec<ZoneTemperature> {
    vec![
        zone("1", 20.0, 21.0, "EMEA_ZONE", Some("House")),
        zone("2", 21.0, 22.0, "DOMESTIC_HOT_WATER", None),
    ]
}

pub fn vendors(
    somecomfort: Arc<MockSomeComfortConnector>,
    evohome: Arc<MockEvohomeConnector>,
) -> HoneywellVendors {
    HoneywellVendors::new(somecomfort, evohome)
}

/// Vendors for a US-only test; the Evohome side has no zones
pub fn us_vendors(somecomfort: Arc<MockSomeComfortConnector>) -> HoneywellVendors {
    let evohome = Arc::new(MockEvohomeConnector::new(Arc::new(MockEvohome::default())));
    vendors(somecomfort, evohome)
}

/// Vendors for an EU-only test
pub fn eu_vendors(evohome: Arc<MockEvohomeConnector>) -> HoneywellVendors {
    let somecomfort = Arc::new(MockSomeComfortConnector::new(MockSomeComfort::default()));
    vendors(somecomfort, evohome)
}
