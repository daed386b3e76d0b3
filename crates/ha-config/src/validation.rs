//! Schema helpers for platform configs
//!
//! Platform configs are plain serde structs; these helpers give them the
//! lenient coercions users expect from YAML (`away_temperature: "17"`,
//! numeric ids written without quotes).

use crate::error::{ConfigError, ConfigResult};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Validate a platform entry against its config struct
///
/// Anything other than a mapping is rejected up front so that `null` and
/// scalars get a readable message instead of a serde type error.
pub fn validate_platform_config<T: DeserializeOwned>(
    platform: &str,
    value: &Value,
) -> ConfigResult<T> {
    if !value.is_mapping() {
        return Err(ConfigError::ValidationFailed {
            platform: platform.to_string(),
            message: "expected a dictionary".to_string(),
        });
    }

    serde_yaml::from_value(value.clone()).map_err(|e| ConfigError::ValidationFailed {
        platform: platform.to_string(),
        message: e.to_string(),
    })
}

/// Accept a number or a numeric string as `f64`
pub fn coerce_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("expected float, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected float, got '{}'", s))),
        other => Err(D::Error::custom(format!("expected float, got {:?}", other))),
    }
}

/// Accept an optional id written as a string or a number
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or number id, got {:?}",
            other
        ))),
    }
}
