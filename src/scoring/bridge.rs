//! Bridge-construction scoring policy
//!
//! Optimizes connective capacity usage: how many structural bridges the
//! target needs versus what the tracer can construct in one pass.

use crate::model::{BloomTarget, QualityVector, TracerProfile};
use crate::scoring::{PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
use crate::topology::{zones, PathwayTopology};

/// Complexity sweet spot for bridge work
const IDEAL_COMPLEXITY: f64 = 0.6;

/// Policy for the bridge-construction specialization
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeConstructionPolicy;

impl ScoringPolicy for BridgeConstructionPolicy {
    fn name(&self) -> &str {
        "bridge-construction"
    }

    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        _context: Option<&RouteContext>,
        topology: &PathwayTopology,
        max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError> {
        let required_bridges = (2 * target.depth).min(profile.bridge_capacity);
        let bridge_efficiency = if profile.bridge_capacity > 0 {
            required_bridges as f64 / profile.bridge_capacity as f64
        } else {
            0.0
        };

        let complexity_fit = 1.0 - (target.complexity - IDEAL_COMPLEXITY).abs();
        let coherence = target.quality.get(QualityVector::COHERENCE);

        let score = 0.4 * target.token_density
            + 0.3 * coherence
            + 0.2 * complexity_fit
            + 0.1 * bridge_efficiency;

        let estimated_time = required_bridges as f64 * 0.5 / profile.analysis_speed;
        let resource_cost = required_bridges as f64 * (2.0 - profile.resource_efficiency);
        let success_probability = (0.8 * score + 0.2).min(0.95);

        let path = topology.build_path(zones::SYNTHESIS_CHAMBER, target, max_path_len);

        let rationale = if target.token_density > 0.6 {
            format!(
                "Token bridging opportunity: density {:.2}, {} bridges of {} capacity",
                target.token_density, required_bridges, profile.bridge_capacity
            )
        } else {
            format!(
                "Interconnection pathway construction ({} bridges, coherence {:.2})",
                required_bridges, coherence
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
