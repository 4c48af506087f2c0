//! Deep-pattern scoring policy
//!
//! Prefers moderate-to-high depth and mid-range entropy, with a bonus for
//! structures in active transition.

use crate::model::{BloomTarget, TracerProfile};
use crate::scoring::{triangular_fit, PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
use crate::topology::{zones, PathwayTopology};

const DEPTH_FALLOFF: f64 = 0.2;
const ENTROPY_FALLOFF: f64 = 0.2;
const TRANSITION_BONUS: f64 = 0.3;

/// Policy for the deep-pattern specialization
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepPatternPolicy;

impl ScoringPolicy for DeepPatternPolicy {
    fn name(&self) -> &str {
        "deep-pattern"
    }

    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        _context: Option<&RouteContext>,
        topology: &PathwayTopology,
        max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError> {
        let (depth_lo, depth_hi) = profile.preferred_depth_range;
        let depth_score = triangular_fit(
            target.depth as f64,
            depth_lo as f64,
            depth_hi as f64,
            DEPTH_FALLOFF,
        );

        let (entropy_lo, entropy_hi) = profile.entropy_affinity;
        let entropy_score = triangular_fit(target.entropy, entropy_lo, entropy_hi, ENTROPY_FALLOFF);

        let rebloom_bonus = if target.status.is_transitional() {
            TRANSITION_BONUS
        } else {
            0.0
        };
        let quality_score = target.quality.mean_of(&profile.focus_dimensions);

        let score =
            0.3 * depth_score + 0.3 * entropy_score + 0.2 * quality_score + 0.2 * rebloom_bonus;

        let estimated_time = target.depth as f64 * 2.0 / profile.analysis_speed;
        let resource_cost = target.complexity * (2.0 - profile.resource_efficiency);
        let success_probability = (0.8 * score + 0.2).min(0.95);

        let path = topology.build_path(zones::ANALYSIS_CORE, target, max_path_len);

        let rationale = if target.status.is_transitional() {
            format!(
                "Pattern analysis of {} structure (depth {}, entropy {:.2})",
                target.status, target.depth, target.entropy
            )
        } else {
            format!(
                "Deep pattern recognition in {} bloom (quality focus {:.2})",
                target.status, quality_score
            )
        };

        ScoringOutcome::checked(
            self.name(),
            score,
            path,
            estimated_time,
            resource_cost,
            success_probability,
            rationale,
        )
    }
}
