//! Routing engine orchestration
//!
//! Composes the registry, catalog, topology, cache, history and statistics
//! into the routing operation surface. The engine is synchronous and
//! CPU-bound; all mutable state is owned by the instance and protected by
//! its own locks, so independent engines can coexist in one process.

pub mod cache;
pub mod history;
pub mod stats;

pub use self::stats::RoutingStatistics;

use self::cache::RouteCache;
use self::history::{ActiveRoutes, RouteHistory};
use self::stats::StatsCollector;
use crate::catalog::{CatalogEntry, TracerCatalog};
use crate::config::RouterConfig;
use crate::error::{RouteError, RouterResult};
use crate::model::{BloomTarget, RouteRecord, RouteResult, RouteSummary};
use crate::registry::TargetRegistry;
use crate::scoring::{RouteContext, ScoringOutcome};
use crate::topology::PathwayTopology;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Capability-aware routing engine matching tracers to bloom targets
#[derive(Debug)]
pub struct RoutingEngine {
    config: RouterConfig,
    catalog: TracerCatalog,
    topology: PathwayTopology,
    registry: TargetRegistry,
    cache: RouteCache,
    history: RouteHistory,
    active: ActiveRoutes,
    stats: StatsCollector,
}

impl RoutingEngine {
    /// Engine with the built-in tracer catalog
    pub fn new(config: RouterConfig) -> Self {
        Self::with_catalog(config, TracerCatalog::builtin())
    }

    /// Engine with an externally supplied catalog
    pub fn with_catalog(config: RouterConfig, catalog: TracerCatalog) -> Self {
        let cache = RouteCache::new(config.cache_ttl_secs);
        let history = RouteHistory::new(config.history_capacity);
        let active = ActiveRoutes::new(config.active_route_capacity);

        info!(
            "Routing engine initialized: {} tracers, ttl {}s, threshold {:.2}",
            catalog.len(),
            config.cache_ttl_secs,
            config.min_success_probability
        );

        Self {
            config,
            catalog,
            topology: PathwayTopology::new(),
            registry: TargetRegistry::new(),
            cache,
            history,
            active,
            stats: StatsCollector::new(),
        }
    }

    /// Register or overwrite a bloom target. Overwriting drops any cached
    /// routes to that target so later calls see only the new values.
    pub fn add_bloom_target(&self, target: BloomTarget) {
        let id = target.id.clone();
        self.registry.insert(target);
        self.cache.invalidate_target(&id);
    }

    /// Route a tracer to a specific bloom target.
    ///
    /// Resolves the tracer profile and target, consults the cache, and
    /// otherwise runs the tracer's scoring policy. Accepted routes are
    /// cached, buffered, logged to history and counted; attempts below the
    /// viability threshold or hitting a policy fault are counted as failed.
    /// Unknown tracer names and missing targets are caller errors and leave
    /// the statistics untouched.
    pub fn route(
        &self,
        tracer_type: &str,
        target_id: &str,
        context: Option<&RouteContext>,
    ) -> RouterResult<RouteResult> {
        let started = Instant::now();

        let entry = self.resolve_tracer(tracer_type)?;
        let canonical = entry.profile.name.clone();

        let target = self.registry.get(target_id).ok_or_else(|| {
            warn!("Bloom target not found: {}", target_id);
            RouteError::target_not_found(target_id)
        })?;

        if let Some(hit) = self.cache.get(&canonical, target_id) {
            self.stats.record_cache_hit();
            debug!("Cache hit: {} -> {}", canonical, target_id);
            return Ok(hit);
        }

        let outcome = match entry.policy.evaluate(
            &entry.profile,
            &target,
            context,
            &self.topology,
            self.config.max_path_length,
        ) {
            Ok(outcome) => outcome,
            Err(fault) => {
                self.stats.record_failure(started.elapsed());
                warn!(
                    "Policy '{}' failed for {} -> {}: {}",
                    entry.policy.name(),
                    canonical,
                    target_id,
                    fault
                );
                return Err(RouteError::policy_computation(canonical, fault.to_string()));
            }
        };

        if outcome.success_probability < self.config.min_success_probability {
            self.stats.record_failure(started.elapsed());
            debug!(
                "Route rejected: {} -> {} (p {:.3} < {:.3})",
                canonical,
                target_id,
                outcome.success_probability,
                self.config.min_success_probability
            );
            return Err(RouteError::NoViableRoute {
                tracer_type: canonical,
                target_id: target_id.to_string(),
                success_probability: outcome.success_probability,
                threshold: self.config.min_success_probability,
            });
        }

        let result = Self::into_result(&canonical, target_id, outcome);

        self.cache.insert(result.clone());
        self.active.push(result.clone());
        // History is appended only here, as a post-condition of acceptance
        self.history.push(RouteRecord::new(canonical.as_str(), target_id));
        self.stats.record_success(started.elapsed());

        info!(
            "Routed {} to {} (score {:.3}, p {:.3}, {} stages)",
            canonical,
            target_id,
            result.score,
            result.success_probability,
            result.path.len()
        );

        Ok(result)
    }

    /// Score every registered target for one tracer type.
    ///
    /// Bypasses the cache (this is an exploratory query), keeps only
    /// entries meeting the viability threshold, and sorts by score
    /// descending with a deterministic tie-break on target id. A policy
    /// fault on one target skips that target; an unknown tracer name is the
    /// same error `route` produces.
    pub fn get_available_routes(&self, tracer_type: &str) -> RouterResult<Vec<RouteSummary>> {
        let entry = self.resolve_tracer(tracer_type)?;
        let canonical = entry.profile.name.clone();

        let mut summaries = Vec::new();
        for target in self.registry.all() {
            let outcome = match entry.policy.evaluate(
                &entry.profile,
                &target,
                None,
                &self.topology,
                self.config.max_path_length,
            ) {
                Ok(outcome) => outcome,
                Err(fault) => {
                    warn!(
                        "Skipping target {} in availability scan: {}",
                        target.id, fault
                    );
                    continue;
                }
            };

            if outcome.success_probability < self.config.min_success_probability {
                continue;
            }

            let result = Self::into_result(&canonical, &target.id, outcome);
            summaries.push(RouteSummary::from_result(result, &target));
        }

        summaries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.target_id.cmp(&b.target_id))
        });

        debug!(
            "Found {} available routes for {}",
            summaries.len(),
            canonical
        );

        Ok(summaries)
    }

    /// Pure statistics snapshot; no side effects
    pub fn get_routing_statistics(&self) -> RoutingStatistics {
        self.stats.snapshot(
            self.active.len(),
            self.cache.len(),
            self.registry.len(),
            self.history.usage_counts(self.config.history_capacity),
        )
    }

    /// Recent accepted-route records, oldest first, optionally filtered by
    /// tracer type
    pub fn route_history(&self, tracer_type: Option<&str>, limit: usize) -> Vec<RouteRecord> {
        self.history.recent(tracer_type, limit)
    }

    /// Snapshot of the active-route buffer, oldest first
    pub fn active_routes(&self) -> Vec<RouteResult> {
        self.active.snapshot()
    }

    /// Drop all buffered active routes
    pub fn clear_active_routes(&self) {
        self.active.clear();
        debug!("Cleared active routes");
    }

    /// Number of registered bloom targets
    pub fn target_count(&self) -> usize {
        self.registry.len()
    }

    /// The engine's configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Rewind a cache entry's creation time (for testing TTL expiry only)
    ///
    /// WARNING: bypasses normal cache timestamping; ONLY for tests that
    /// verify expiry behavior.
    #[doc(hidden)]
    pub fn backdate_cached_route(&self, tracer_type: &str, target_id: &str, seconds: i64) -> bool {
        self.cache.backdate(tracer_type, target_id, seconds)
    }

    fn resolve_tracer(&self, tracer_type: &str) -> RouterResult<&CatalogEntry> {
        self.catalog.resolve(tracer_type).ok_or_else(|| {
            warn!("Unknown tracer type requested: {}", tracer_type);
            RouteError::unknown_tracer_type(tracer_type)
        })
    }

    fn into_result(tracer_type: &str, target_id: &str, outcome: ScoringOutcome) -> RouteResult {
        RouteResult {
            tracer_type: tracer_type.to_string(),
            target_id: target_id.to_string(),
            path: outcome.path,
            score: outcome.score,
            estimated_time: outcome.estimated_time,
            resource_cost: outcome.resource_cost,
            success_probability: outcome.success_probability,
            rationale: outcome.rationale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QualityVector, RebloomStatus};

    fn engine() -> RoutingEngine {
        RoutingEngine::new(RouterConfig::default())
    }

    fn reblooming_target(id: &str) -> BloomTarget {
        BloomTarget::new(id, 5, 0.6, 0.5, QualityVector::scup(0.7, 0.8, 0.5, 0.3))
            .with_status(RebloomStatus::Reblooming)
    }

    #[test]
    fn test_route_resolves_case_insensitively() {
        let engine = engine();
        engine.add_bloom_target(reblooming_target("bloom-1"));

        let result = engine.route("OWL", "bloom-1", None).unwrap();
        assert_eq!(result.tracer_type, "owl");
        assert_eq!(result.target_id, "bloom-1");
    }

    #[test]
    fn test_unknown_tracer_is_caller_error() {
        let engine = engine();
        engine.add_bloom_target(reblooming_target("bloom-1"));

        let error = engine.route("sparrow", "bloom-1", None).unwrap_err();
        assert!(matches!(error, RouteError::UnknownTracerType { .. }));
    }

    #[test]
    fn test_missing_target_is_caller_error() {
        let engine = engine();
        let error = engine.route("owl", "nowhere", None).unwrap_err();
        assert!(matches!(error, RouteError::TargetNotFound { .. }));
    }

    #[test]
    fn test_accepted_route_is_cached_and_logged() {
        let engine = engine();
        engine.add_bloom_target(reblooming_target("bloom-1"));

        let first = engine.route("owl", "bloom-1", None).unwrap();
        let second = engine.route("owl", "bloom-1", None).unwrap();
        assert_eq!(first, second);

        let stats = engine.get_routing_statistics();
        assert_eq!(stats.total_routes, 1);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(engine.route_history(None, 10).len(), 1);
        assert_eq!(engine.active_routes().len(), 1);
    }

    #[test]
    fn test_overwriting_target_invalidates_cache() {
        let engine = engine();
        engine.add_bloom_target(reblooming_target("bloom-1"));
        let before = engine.route("owl", "bloom-1", None).unwrap();

        // Same id, different shape: stable, shallow, low quality
        engine.add_bloom_target(BloomTarget::new(
            "bloom-1",
            1,
            0.1,
            0.2,
            QualityVector::scup(0.2, 0.2, 0.5, 0.5),
        ));

        let after = engine.route("owl", "bloom-1", None).unwrap();
        assert!(after.score < before.score);
        // Two computed routes, no cache hit in between
        let stats = engine.get_routing_statistics();
        assert_eq!(stats.total_routes, 2);
        assert_eq!(stats.cache_hits, 0);
    }

    #[test]
    fn test_clear_active_routes() {
        let engine = engine();
        engine.add_bloom_target(reblooming_target("bloom-1"));
        engine.route("owl", "bloom-1", None).unwrap();

        assert_eq!(engine.active_routes().len(), 1);
        engine.clear_active_routes();
        assert!(engine.active_routes().is_empty());

        // Statistics reflect the emptied buffer
        assert_eq!(engine.get_routing_statistics().active_route_count, 0);
    }
}
