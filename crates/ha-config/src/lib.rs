//! YAML configuration loading for Home Assistant platforms
//!
//! This crate loads `configuration.yaml` with the custom tags platform
//! configs rely on, and provides the helpers a platform uses to find and
//! validate its own entries:
//!
//! - `!secret key` - Substitute from secrets.yaml
//! - `!env_var VAR` - Environment variable substitution
//! - `!include path` - Include another YAML file
//!
//! # Example
//!
//! ```ignore
//! use ha_config::{load_yaml, platform_configs};
//!
//! let config = load_yaml("/config", "configuration.yaml")?;
//! for entry in platform_configs(&config, "climate", "honeywell") {
//!     // validate and set up each entry
//! }
//! ```

mod error;
mod loader;
mod platform;
mod secrets;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_yaml, load_yaml_string, YamlLoader};
pub use platform::{
    config_per_platform, domain_keys, platform_configs, PlatformConfig, CONF_PLATFORM,
};
pub use secrets::{Secrets, SECRETS_FILE};
pub use validation::{coerce_float, optional_id, validate_platform_config};

// Re-export serde_yaml::Value for convenience
pub use serde_yaml::Value;
