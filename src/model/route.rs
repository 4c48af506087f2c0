//! Route outcome types
//!
//! `RouteResult` is what a routing attempt returns, `RouteSummary` decorates
//! it with target attributes for exploratory queries, and `RouteRecord` is
//! the compact history entry kept for analytics.

use crate::model::target::{BloomTarget, RebloomStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of matching one tracer to one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Canonical tracer name from the catalog
    pub tracer_type: String,
    /// Bloom target identifier
    pub target_id: String,
    /// Ordered pathway stages, terminated by `target:<id>`
    pub path: Vec<String>,
    /// Match quality in [0, 1]
    pub score: f64,
    /// Estimated analysis time in seconds, always positive
    pub estimated_time: f64,
    /// Computational resource cost, non-negative
    pub resource_cost: f64,
    /// Probability the analysis succeeds, in [0, 1]
    pub success_probability: f64,
    /// Human-readable explanation of the routing decision
    pub rationale: String,
}

/// A `RouteResult` plus target attributes, returned by exploratory queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub tracer_type: String,
    pub target_id: String,
    pub path: Vec<String>,
    pub score: f64,
    pub estimated_time: f64,
    pub resource_cost: f64,
    pub success_probability: f64,
    pub rationale: String,
    /// Target structural depth
    pub target_depth: u32,
    /// Target entropy
    pub target_entropy: f64,
    /// Target lifecycle status
    pub target_status: RebloomStatus,
}

impl RouteSummary {
    /// Decorate a route result with the target's attributes
    pub fn from_result(result: RouteResult, target: &BloomTarget) -> Self {
        Self {
            tracer_type: result.tracer_type,
            target_id: result.target_id,
            path: result.path,
            score: result.score,
            estimated_time: result.estimated_time,
            resource_cost: result.resource_cost,
            success_probability: result.success_probability,
            rationale: result.rationale,
            target_depth: target.depth,
            target_entropy: target.entropy,
            target_status: target.status,
        }
    }
}

/// Compact history record of one accepted route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// When the route was accepted
    pub timestamp: DateTime<Utc>,
    /// Canonical tracer name
    pub tracer_type: String,
    /// Bloom target identifier
    pub target_id: String,
    /// Unique id for this routing attempt
    pub route_id: Uuid,
}

impl RouteRecord {
    /// Create a record for an accepted route, stamped now
    pub fn new<S: Into<String>, T: Into<String>>(tracer_type: S, target_id: T) -> Self {
        Self {
            timestamp: Utc::now(),
            tracer_type: tracer_type.into(),
            target_id: target_id.into(),
            route_id: Uuid::new_v4(),
        }
    }
}
