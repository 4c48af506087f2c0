//! Scoring policies
//!
//! One strategy per tracer specialization plus a fallback. Each policy is a
//! pure, deterministic function of the tracer profile, the bloom target and
//! an optional caller context; the engine never needs to know which
//! specialization it is driving, so new specializations are added by
//! registering a profile/policy pair in the catalog without touching the
//! orchestrator.

pub mod bridge;
pub mod deep_pattern;
pub mod fallback;
pub mod high_density;
pub mod weakness;

pub use bridge::BridgeConstructionPolicy;
pub use deep_pattern::DeepPatternPolicy;
pub use fallback::FallbackPolicy;
pub use high_density::HighDensityPolicy;
pub use weakness::WeaknessDetectionPolicy;

use crate::model::{BloomTarget, TracerProfile};
use crate::topology::PathwayTopology;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Floor applied to estimated analysis times, seconds
const MIN_ESTIMATED_TIME_SECS: f64 = 0.1;

/// Optional caller-supplied hints passed through to policies.
///
/// The built-in policies are deterministic functions of profile and target
/// and derive no score adjustments from the context; it exists so custom
/// policies can weigh caller intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Caller urgency hint in [0, 1]
    pub urgency: Option<f64>,
    /// Free-form annotations
    #[serde(default)]
    pub notes: HashMap<String, String>,
}

impl RouteContext {
    /// Context carrying only an urgency hint
    pub fn with_urgency(urgency: f64) -> Self {
        Self {
            urgency: Some(urgency.clamp(0.0, 1.0)),
            notes: HashMap::new(),
        }
    }
}

/// Error raised by a scoring policy for unexpected internal faults.
///
/// Caught at the orchestration boundary, counted as a failed route, and
/// never propagated as a panic.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Policy '{policy}' computation failed: {message}")]
pub struct PolicyError {
    pub policy: String,
    pub message: String,
}

impl PolicyError {
    pub fn new<P: Into<String>, M: Into<String>>(policy: P, message: M) -> Self {
        Self {
            policy: policy.into(),
            message: message.into(),
        }
    }
}

/// What a scoring policy produces for one `(profile, target)` pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutcome {
    pub score: f64,
    pub path: Vec<String>,
    pub estimated_time: f64,
    pub resource_cost: f64,
    pub success_probability: f64,
    pub rationale: String,
}

impl ScoringOutcome {
    /// Build an outcome, clamping `score` and `success_probability` into
    /// [0, 1], flooring the time estimate, and rejecting non-finite values
    /// as a policy fault.
    pub fn checked(
        policy: &str,
        score: f64,
        path: Vec<String>,
        estimated_time: f64,
        resource_cost: f64,
        success_probability: f64,
        rationale: String,
    ) -> Result<Self, PolicyError> {
        for (name, value) in [
            ("score", score),
            ("estimated_time", estimated_time),
            ("resource_cost", resource_cost),
            ("success_probability", success_probability),
        ] {
            if !value.is_finite() {
                return Err(PolicyError::new(
                    policy,
                    format!("non-finite {name}: {value}"),
                ));
            }
        }

        Ok(Self {
            score: score.clamp(0.0, 1.0),
            path,
            estimated_time: estimated_time.max(MIN_ESTIMATED_TIME_SECS),
            resource_cost: resource_cost.max(0.0),
            success_probability: success_probability.clamp(0.0, 1.0),
            rationale,
        })
    }
}

/// Strategy interface for tracer scoring.
///
/// Implementations must be pure and deterministic: identical inputs yield
/// identical outcomes, which is what makes the route cache sound.
pub trait ScoringPolicy: Send + Sync {
    /// Policy name, used in logs and fault reports
    fn name(&self) -> &str;

    /// Score one target for one tracer profile
    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        context: Option<&RouteContext>,
        topology: &PathwayTopology,
        max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError>;
}

/// Fit of a value against an inclusive preference range: 1.0 inside the
/// range, decaying linearly outside it at `falloff` per unit of distance.
pub fn triangular_fit(value: f64, lo: f64, hi: f64, falloff: f64) -> f64 {
    if value >= lo && value <= hi {
        1.0
    } else {
        let distance = if value < lo { lo - value } else { value - hi };
        (1.0 - distance * falloff).max(0.0)
    }
}
