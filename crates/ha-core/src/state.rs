//! State snapshot the host records for an entity

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EntityId;

/// The state of an entity at a point in time
///
/// The state value is a plain string (`"heat"`, `"cool"`, `"unknown"`); the
/// interesting numbers of a climate entity travel in `attributes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub entity_id: EntityId,

    pub state: String,

    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    /// When this snapshot was taken
    pub last_updated: DateTime<Utc>,
}

impl State {
    pub fn new(
        entity_id: EntityId,
        state: impl Into<String>,
        attributes: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            entity_id,
            state: state.into(),
            attributes,
            last_updated: Utc::now(),
        }
    }

    /// Get an attribute value by key
    pub fn attribute<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn is_unknown(&self) -> bool {
        self.state == crate::STATE_UNKNOWN
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        // timestamps are not compared
        self.entity_id == other.entity_id
            && self.state == other.state
            && self.attributes == other.attributes
    }
}
