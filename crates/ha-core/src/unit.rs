//! Temperature units

use serde::{Deserialize, Serialize};
use std::fmt;

pub const TEMP_CELSIUS: &str = "°C";
pub const TEMP_FAHRENHEIT: &str = "°F";

/// Unit a thermostat reports its temperatures in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Map a vendor unit code (`"C"` / `"F"`)
    ///
    /// Only `"C"` means Celsius; cloud APIs that omit or garble the code are
    /// US devices, which default to Fahrenheit.
    pub fn from_code(code: &str) -> Self {
        if code == "C" {
            Self::Celsius
        } else {
            Self::Fahrenheit
        }
    }

    /// Display symbol used as `unit_of_measurement`
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => TEMP_CELSIUS,
            Self::Fahrenheit => TEMP_FAHRENHEIT,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
