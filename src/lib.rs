//! Tracer Router - Capability-Aware Routing Engine
//!
//! An in-process matching core that assigns specialized analysis agents
//! ("tracers") to candidate work items ("bloom targets") based on
//! per-specialization scoring policies, subject to a minimum viability
//! threshold, with result caching, attempt history and aggregate
//! statistics.
//!
//! # Overview
//!
//! - Bloom targets live in a thread-safe registry; inserting an existing id
//!   overwrites it.
//! - Tracer capability profiles and their scoring policies live in a
//!   read-only catalog, resolved case-insensitively by name.
//! - Each scoring policy is a pure function of `(profile, target, context)`
//!   producing a score, a synthesized pathway, time/cost estimates and a
//!   success probability.
//! - Accepted routes are memoized in a TTL cache, buffered as active
//!   routes, and recorded in a bounded history that feeds the statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use tracer_router::{
//!     BloomTarget, QualityVector, RebloomStatus, RouterConfig, RoutingEngine,
//! };
//!
//! let engine = RoutingEngine::new(RouterConfig::default());
//!
//! engine.add_bloom_target(
//!     BloomTarget::new(
//!         "bloom-1",
//!         5,
//!         0.6,
//!         0.7,
//!         QualityVector::scup(0.7, 0.8, 0.5, 0.3),
//!     )
//!     .with_token_density(0.8)
//!     .with_status(RebloomStatus::Reblooming),
//! );
//!
//! let result = engine.route("owl", "bloom-1", None).unwrap();
//! assert!(result.score > 0.0 && result.score <= 1.0);
//! assert_eq!(result.path.last().unwrap(), "target:bloom-1");
//!
//! // Exploratory query: every viable target for one tracer, best first
//! let options = engine.get_available_routes("owl").unwrap();
//! assert_eq!(options[0].target_id, "bloom-1");
//!
//! let stats = engine.get_routing_statistics();
//! assert_eq!(stats.total_routes, stats.successful_routes + stats.failed_routes);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod observability;
pub mod registry;
pub mod scoring;
pub mod topology;

pub use catalog::{CatalogEntry, TracerCatalog};
pub use config::{ConfigError, RouterConfig};
pub use engine::{RoutingEngine, RoutingStatistics};
pub use error::{RouteError, RouterResult};
pub use model::{
    BloomTarget, QualityVector, RebloomStatus, RouteRecord, RouteResult, RouteSummary,
    TracerProfile,
};
pub use scoring::{PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
pub use topology::PathwayTopology;
