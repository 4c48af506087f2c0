//! Data model for tracer routing
//!
//! Bloom targets are the units of analyzable work, tracer profiles describe
//! agent capabilities, and route types carry the outcome of matching one to
//! the other.

pub mod route;
pub mod target;
pub mod tracer;

pub use route::{RouteRecord, RouteResult, RouteSummary};
pub use target::{BloomTarget, ParseRebloomStatusError, QualityVector, RebloomStatus};
pub use tracer::TracerProfile;
