use std::hash::Hash;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::LruError, lru::OrderedLru};

/// Capacity as it appears on the wire, wide and signed so any out of range
/// integer is reported as an invalid capacity
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLruConfig {
    capacity: i128,
}

/// Validated cache configuration
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruConfig {
    capacity: usize,
}

impl LruConfig {
    pub fn new(capacity: usize) -> Self {
        LruConfig { capacity }
    }

    /// Parse a `{ "capacity": n }` JSON document
    pub fn from_json_str(s: &str) -> Result<Self, LruError> {
        let raw: RawLruConfig = serde_json::from_str(s)?;
        let capacity = usize::try_from(raw.capacity)
            .map_err(|_| LruError::InvalidCapacity(raw.capacity))?;

        debug!("Loaded cache config with capacity {capacity}");
        Ok(LruConfig { capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Build an empty cache with this configuration
    pub fn build<K: Hash + Eq + Clone, V>(&self) -> OrderedLru<K, V> {
        OrderedLru::new(self.capacity)
    }
}
