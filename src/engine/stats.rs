//! Routing statistics
//!
//! Atomic counters owned by the engine instance (no process-wide globals)
//! plus a pure snapshot type. Counters are monotonically non-decreasing for
//! the engine's lifetime; only scored attempts move the route counters.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Thread-safe statistics collector
#[derive(Debug, Default)]
pub struct StatsCollector {
    total_routes: AtomicU64,
    successful_routes: AtomicU64,
    failed_routes: AtomicU64,
    cache_hits: AtomicU64,
    // Sum of scored-attempt durations, for the running mean
    routing_time_micros: AtomicU64,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted route and its computation time
    pub fn record_success(&self, elapsed: Duration) {
        self.total_routes.fetch_add(1, Ordering::Relaxed);
        self.successful_routes.fetch_add(1, Ordering::Relaxed);
        self.routing_time_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a scored attempt that was rejected or faulted
    pub fn record_failure(&self, elapsed: Duration) {
        self.total_routes.fetch_add(1, Ordering::Relaxed);
        self.failed_routes.fetch_add(1, Ordering::Relaxed);
        self.routing_time_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a cache hit (not a new routing attempt)
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Build a snapshot, folding in current collection sizes
    pub fn snapshot(
        &self,
        active_route_count: usize,
        cached_route_count: usize,
        target_count: usize,
        tracer_usage: HashMap<String, u64>,
    ) -> RoutingStatistics {
        let total = self.total_routes.load(Ordering::Relaxed);
        let successful = self.successful_routes.load(Ordering::Relaxed);
        let failed = self.failed_routes.load(Ordering::Relaxed);
        let time_micros = self.routing_time_micros.load(Ordering::Relaxed);

        let success_rate = if total > 0 {
            successful as f64 / total as f64
        } else {
            0.0
        };
        let average_routing_time = if total > 0 {
            (time_micros as f64 / total as f64) / 1_000_000.0
        } else {
            0.0
        };

        RoutingStatistics {
            total_routes: total,
            successful_routes: successful,
            failed_routes: failed,
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            success_rate,
            average_routing_time,
            active_route_count,
            cached_route_count,
            target_count,
            tracer_usage,
        }
    }
}

/// Read-only statistics snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingStatistics {
    pub total_routes: u64,
    pub successful_routes: u64,
    pub failed_routes: u64,
    pub cache_hits: u64,
    /// successful / total, 0.0 before any scored attempt
    pub success_rate: f64,
    /// Mean scored-attempt duration in seconds
    pub average_routing_time: f64,
    pub active_route_count: usize,
    pub cached_route_count: usize,
    pub target_count: usize,
    /// Per-tracer counts over the recent history window
    pub tracer_usage: HashMap<String, u64>,
}
