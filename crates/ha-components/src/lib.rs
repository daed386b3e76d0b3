//! Home Assistant Built-in Components
//!
//! This crate contains implementations of Home Assistant integrations that
//! don't require Python. Currently the Honeywell climate platform.

pub mod honeywell;

pub use honeywell::{setup_platform, HoneywellConfig, HoneywellVendors, Region};
