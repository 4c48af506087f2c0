//! High-density-processing scoring policy
//!
//! Favors entropic, token-dense, complex targets that reward bulk
//! consolidation passes.

use crate::model::{BloomTarget, QualityVector, TracerProfile};
use crate::scoring::{triangular_fit, PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
use crate::topology::{zones, PathwayTopology};

const ENTROPY_FALLOFF: f64 = 0.15;

/// Policy for the high-density specialization
#[derive(Debug, Clone, Copy, Default)]
pub struct HighDensityPolicy;

impl ScoringPolicy for HighDensityPolicy {
    fn name(&self) -> &str {
        "high-density"
    }

    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        _context: Option<&RouteContext>,
        topology: &PathwayTopology,
        max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError> {
        let (entropy_lo, entropy_hi) = profile.entropy_affinity;
        let entropy_fit = triangular_fit(target.entropy, entropy_lo, entropy_hi, ENTROPY_FALLOFF);

        let density_score = target.token_density * target.complexity;
        let schema_support = 0.5 * target.quality.get(QualityVector::SCHEMA);

        let score = 0.4 * entropy_fit
            + 0.3 * density_score
            + 0.2 * schema_support
            + 0.1 * (target.depth as f64 / 10.0);

        let estimated_time = target.entropy * density_score * 5.0 / profile.analysis_speed;
        let resource_cost = density_score * 3.0 * (2.0 - profile.resource_efficiency);
        let success_probability = (0.8 * score + 0.2).min(0.95);

        let path = topology.build_path(zones::MEMORY_BANK, target, max_path_len);

        let rationale = if target.entropy > 0.6 {
            format!(
                "High-density processing: entropy {:.2}, density {:.2}",
                target.entropy, density_score
            )
        } else {
            format!(
                "Bulk consolidation and pattern extraction (density {:.2})",
                density_score
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

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(target: &BloomTarget) -> ScoringOutcome {
        HighDensityPolicy
            .evaluate(
                &TracerProfile::whale(),
                target,
                None,
                &PathwayTopology::new(),
                6,
            )
            .unwrap()
    }

    #[test]
    fn test_entropic_dense_target_scores_high() {
        let target = BloomTarget::new(
            "a",
            6,
            0.8,
            0.9,
            QualityVector::scup(0.9, 0.5, 0.5, 0.5),
        )
        .with_token_density(0.9);

        // entropy_fit 1.0, density 0.81, schema_support 0.45, depth term 0.06
        let expected = 0.4 + 0.3 * 0.81 + 0.2 * 0.45 + 0.06;
        let outcome = evaluate(&target);
        assert!((outcome.score - expected).abs() < 1e-9);
        assert!(outcome.rationale.contains("High-density"));
    }

    #[test]
    fn test_calm_sparse_target_scores_low() {
        let target = BloomTarget::new("a", 1, 0.1, 0.1, QualityVector::default())
            .with_token_density(0.1);

        let outcome = evaluate(&target);
        assert!(outcome.score < 0.5);
    }

    #[test]
    fn test_zero_entropy_time_is_floored() {
        let target = BloomTarget::new("a", 4, 0.0, 0.5, QualityVector::default());

        let outcome = evaluate(&target);
        assert!(outcome.estimated_time > 0.0);
    }

    #[test]
    fn test_cost_scales_with_density() {
        let dense = BloomTarget::new("a", 4, 0.7, 0.9, QualityVector::default())
            .with_token_density(0.9);
        let sparse = BloomTarget::new("a", 4, 0.7, 0.2, QualityVector::default())
            .with_token_density(0.2);

        assert!(evaluate(&dense).resource_cost > evaluate(&sparse).resource_cost);
    }

    #[test]
    fn test_very_deep_target_score_stays_clamped() {
        let target = BloomTarget::new("a", 50, 0.8, 0.9, QualityVector::scup(1.0, 0.5, 0.5, 0.5))
            .with_token_density(1.0);

        let outcome = evaluate(&target);
        assert!(outcome.score <= 1.0);
    }
}
