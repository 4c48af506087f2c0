//! Tracer catalog
//!
//! Holds the capability profile and the scoring policy for every known
//! tracer specialization. Populated at construction time (built-ins or
//! supplied externally) and read-only thereafter; lookup is
//! case-insensitive by profile name.

use crate::model::TracerProfile;
use crate::scoring::{
    BridgeConstructionPolicy, DeepPatternPolicy, FallbackPolicy, HighDensityPolicy, ScoringPolicy,
    WeaknessDetectionPolicy,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A profile paired with the strategy that scores for it
#[derive(Clone)]
pub struct CatalogEntry {
    pub profile: TracerProfile,
    pub policy: Arc<dyn ScoringPolicy>,
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("profile", &self.profile.name)
            .field("policy", &self.policy.name())
            .finish()
    }
}

/// Read-only set of tracer capability profiles and their scoring policies
#[derive(Debug, Default)]
pub struct TracerCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl TracerCatalog {
    /// Catalog with no entries; pair with [`TracerCatalog::register`]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Catalog preloaded with the four built-in specializations
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.register(TracerProfile::owl(), Arc::new(DeepPatternPolicy));
        catalog.register(TracerProfile::crow(), Arc::new(WeaknessDetectionPolicy));
        catalog.register(TracerProfile::spider(), Arc::new(BridgeConstructionPolicy));
        catalog.register(TracerProfile::whale(), Arc::new(HighDensityPolicy));
        catalog
    }

    /// Register a profile with its scoring policy. The profile name is the
    /// key, matched case-insensitively; re-registering a name replaces the
    /// prior entry.
    pub fn register(&mut self, profile: TracerProfile, policy: Arc<dyn ScoringPolicy>) {
        let key = profile.name.to_lowercase();
        debug!(
            "Registered tracer '{}' with policy '{}'",
            profile.name,
            policy.name()
        );
        self.entries.insert(key, CatalogEntry { profile, policy });
    }

    /// Register a profile whose specialization has no dedicated policy;
    /// it scores through the neutral fallback.
    pub fn register_profile(&mut self, profile: TracerProfile) {
        self.register(profile, Arc::new(FallbackPolicy));
    }

    /// Case-insensitive lookup by tracer name
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&name.to_lowercase())
    }

    /// Canonical names of all registered tracers
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(|entry| entry.profile.name.as_str())
            .collect()
    }

    /// Number of registered tracers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tracers are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_four_tracers() {
        let catalog = TracerCatalog::builtin();
        assert_eq!(catalog.len(), 4);

        let mut names = catalog.names();
        names.sort();
        assert_eq!(names, vec!["crow", "owl", "spider", "whale"]);
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let catalog = TracerCatalog::builtin();

        assert!(catalog.resolve("owl").is_some());
        assert!(catalog.resolve("OWL").is_some());
        assert!(catalog.resolve("Owl").is_some());
        assert!(catalog.resolve("sparrow").is_none());
    }

    #[test]
    fn test_builtin_policy_pairing() {
        let catalog = TracerCatalog::builtin();

        assert_eq!(catalog.resolve("owl").unwrap().policy.name(), "deep-pattern");
        assert_eq!(
            catalog.resolve("crow").unwrap().policy.name(),
            "weakness-detection"
        );
        assert_eq!(
            catalog.resolve("spider").unwrap().policy.name(),
            "bridge-construction"
        );
        assert_eq!(
            catalog.resolve("whale").unwrap().policy.name(),
            "high-density"
        );
    }

    #[test]
    fn test_profile_without_policy_uses_fallback() {
        let mut catalog = TracerCatalog::empty();
        catalog.register_profile(TracerProfile::new(
            "moth",
            "*",
            "light-seeking",
            (1, 3),
            (0.0, 1.0),
            vec![],
            2,
            1.0,
            0.5,
        ));

        let entry = catalog.resolve("moth").unwrap();
        assert_eq!(entry.policy.name(), "fallback");
    }

    #[test]
    fn test_reregistering_replaces_entry() {
        let mut catalog = TracerCatalog::builtin();
        let mut profile = TracerProfile::owl();
        profile.bridge_capacity = 99;
        catalog.register(profile, Arc::new(FallbackPolicy));

        assert_eq!(catalog.len(), 4);
        let entry = catalog.resolve("owl").unwrap();
        assert_eq!(entry.profile.bridge_capacity, 99);
        assert_eq!(entry.policy.name(), "fallback");
    }
}
