//! Bloom target registry
//!
//! Thread-safe keyed store of bloom targets. Inserting an existing id
//! silently overwrites the prior definition and refreshes its timestamp;
//! there is no delete operation, targets persist for the registry's
//! lifetime.

use crate::model::BloomTarget;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, info};

/// Thread-safe registry of bloom targets keyed by id
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: RwLock<HashMap<String, BloomTarget>>,
}

impl TargetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            targets: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite a target, refreshing its last-updated timestamp
    pub fn insert(&self, mut target: BloomTarget) {
        target.touch();
        let id = target.id.clone();

        let mut targets = self.targets.write().unwrap();
        let is_new = !targets.contains_key(&id);
        targets.insert(id.clone(), target);

        if is_new {
            info!("Registered bloom target: {}", id);
        } else {
            debug!("Overwrote bloom target: {}", id);
        }
    }

    /// Look up a target by id
    pub fn get(&self, id: &str) -> Option<BloomTarget> {
        let targets = self.targets.read().unwrap();
        targets.get(id).cloned()
    }

    /// Check whether a target id is registered
    pub fn contains(&self, id: &str) -> bool {
        let targets = self.targets.read().unwrap();
        targets.contains_key(id)
    }

    /// Snapshot of all registered targets
    pub fn all(&self) -> Vec<BloomTarget> {
        let targets = self.targets.read().unwrap();
        targets.values().cloned().collect()
    }

    /// Number of registered targets
    pub fn len(&self) -> usize {
        let targets = self.targets.read().unwrap();
        targets.len()
    }

    /// True when no targets are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered target ids
    pub fn ids(&self) -> Vec<String> {
        let targets = self.targets.read().unwrap();
        targets.keys().cloned().collect()
    }
}
