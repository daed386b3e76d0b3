//! Home Assistant Rust Server
//!
//! Configuration check for the climate platforms built into this workspace:
//! loads `configuration.yaml` and validates every `honeywell` entry.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ha_components::honeywell::{HoneywellConfig, PLATFORM};
use ha_config::{config_per_platform, load_yaml};
use ha_core::climate;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG_FILE: &str = "configuration.yaml";

/// Validate the honeywell climate platforms in a configuration directory.
#[derive(Parser, Debug)]
#[command(name = "homeassistant")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding configuration.yaml and secrets.yaml.
    #[arg(default_value = ".")]
    config_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let valid = check_config(&args.config_dir)?;
    info!("Configuration valid: {} honeywell platform(s)", valid);
    Ok(())
}

/// Validate every honeywell climate entry, returning how many are valid
///
/// Entries for other platforms are skipped. Any invalid honeywell entry
/// fails the whole check.
fn check_config(config_dir: &Path) -> Result<usize> {
    info!("Checking {:?}", config_dir.join(CONFIG_FILE));

    let root = load_yaml(config_dir, CONFIG_FILE)
        .with_context(|| format!("loading {} from {:?}", CONFIG_FILE, config_dir))?;

    let mut invalid = 0;
    let mut valid = 0;
    for entry in config_per_platform(&root, climate::DOMAIN) {
        match entry.platform.as_deref() {
            Some(PLATFORM) => match HoneywellConfig::from_yaml(&entry.config) {
                Ok(config) => {
                    info!(
                        "honeywell: {} account {} is valid",
                        config.region, config.username
                    );
                    valid += 1;
                }
                Err(err) => {
                    error!("{}", err);
                    invalid += 1;
                }
            },
            Some(other) => warn!("Skipping unknown climate platform {}", other),
            None => warn!("Climate entry without a platform key"),
        }
    }

    if invalid > 0 {
        bail!("{} invalid honeywell configuration(s)", invalid);
    }
    Ok(valid)
}
