//! Weakness-detection scoring policy
//!
//! Seeks imbalance and instability: low utility under high pressure, large
//! utility/pressure divergence, and targets already fragmenting.

use crate::model::{BloomTarget, QualityVector, TracerProfile};
use crate::scoring::{PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
use crate::topology::{zones, PathwayTopology};

const LOW_UTILITY: f64 = 0.3;
const HIGH_PRESSURE: f64 = 0.8;
const IMBALANCE_GAP: f64 = 0.5;
const INSTABILITY_BONUS: f64 = 0.2;

/// Policy for the weakness-detection specialization
#[derive(Debug, Clone, Copy, Default)]
pub struct WeaknessDetectionPolicy;

impl ScoringPolicy for WeaknessDetectionPolicy {
    fn name(&self) -> &str {
        "weakness-detection"
    }

    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        _context: Option<&RouteContext>,
        topology: &PathwayTopology,
        max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError> {
        let utility = target.quality.get(QualityVector::UTILITY);
        let pressure = target.quality.get(QualityVector::PRESSURE);

        let mut weakness = 0.0;
        if utility < LOW_UTILITY {
            weakness += 0.4;
        }
        if pressure > HIGH_PRESSURE {
            weakness += 0.3;
        }
        if (utility - pressure).abs() > IMBALANCE_GAP {
            weakness += 0.3;
        }

        let instability_bonus = if target.status.is_degrading() {
            INSTABILITY_BONUS
        } else {
            0.0
        };

        let score = weakness + instability_bonus;
        let estimated_time = 1.0 + target.complexity / profile.analysis_speed;
        let resource_cost = target.complexity * (2.0 - profile.resource_efficiency);
        let success_probability = (0.7 * score + 0.3).min(0.9);

        let path = topology.build_path(zones::ATTENTION_NEXUS, target, max_path_len);

        let rationale = if utility < LOW_UTILITY && pressure > HIGH_PRESSURE {
            format!(
                "Weakness detected: low utility ({utility:.2}) under high pressure ({pressure:.2})"
            )
        } else if target.status.is_degrading() {
            format!("Instability scan of {} bloom", target.status)
        } else {
            format!("Opportunistic vulnerability probe (weakness {weakness:.2})")
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
