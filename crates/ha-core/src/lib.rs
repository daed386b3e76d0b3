//! Core types for Home Assistant climate platforms
//!
//! This crate provides the host-side types a climate platform works against:
//! EntityId, State, TemperatureUnit, the ClimateEntity trait and the
//! AddEntities registration callback.

pub mod climate;
mod entity_id;
mod platform;
mod state;
mod unit;

pub use climate::ClimateEntity;
pub use entity_id::{slugify, EntityId, EntityIdError};
pub use platform::AddEntities;
pub use state::State;
pub use unit::{TemperatureUnit, TEMP_CELSIUS, TEMP_FAHRENHEIT};

/// State value used when an entity can't report one
pub const STATE_UNKNOWN: &str = "unknown";
