//! Platform sections of a component config
//!
//! `climate:` may hold a single platform mapping or a list of them, and the
//! same component may appear again under keys like `climate 2:`.

use serde_yaml::Value;

pub const CONF_PLATFORM: &str = "platform";

/// One platform entry found under a component key
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformConfig {
    /// Value of the `platform:` key, if present
    pub platform: Option<String>,
    /// The entry itself, `platform:` key included
    pub config: Value,
}

/// Top-level keys that configure `domain` (`climate`, `climate 2`, ...)
pub fn domain_keys<'a>(root: &'a Value, domain: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    root.as_mapping()
        .into_iter()
        .flat_map(|map| map.keys())
        .filter_map(Value::as_str)
        .filter(move |key| {
            *key == domain
                || key
                    .strip_prefix(domain)
                    .is_some_and(|rest| rest.starts_with(' '))
        })
}

/// Every platform entry configured for `domain`, in file order
pub fn config_per_platform(root: &Value, domain: &str) -> Vec<PlatformConfig> {
    let mut entries = Vec::new();

    for key in domain_keys(root, domain) {
        let section = match root.get(key) {
            Some(section) => section,
            None => continue,
        };
        let items: Vec<&Value> = match section {
            Value::Sequence(seq) => seq.iter().collect(),
            Value::Null => Vec::new(),
            other => vec![other],
        };

        for item in items {
            let platform = item
                .get(CONF_PLATFORM)
                .and_then(Value::as_str)
                .map(str::to_string);
            entries.push(PlatformConfig {
                platform,
                config: item.clone(),
            });
        }
    }

    entries
}

/// Entries of `domain` that name the given platform
pub fn platform_configs(root: &Value, domain: &str, platform: &str) -> Vec<Value> {
    config_per_platform(root, domain)
        .into_iter()
        .filter(|entry| entry.platform.as_deref() == Some(platform))
        .map(|entry| entry.config)
        .collect()
}
