//! Neutral fallback policy
//!
//! Used for profiles registered without a specialized policy. Produces a
//! neutral score with a generic two-zone path so unrecognized
//! specializations still route deterministically.

use crate::model::{BloomTarget, TracerProfile};
use crate::scoring::{PolicyError, RouteContext, ScoringOutcome, ScoringPolicy};
use crate::topology::{zones, PathwayTopology};

const NEUTRAL_SCORE: f64 = 0.5;
const FIXED_TIME_SECS: f64 = 5.0;
const FIXED_COST: f64 = 1.0;

/// Neutral policy for unregistered specializations
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPolicy;

impl ScoringPolicy for FallbackPolicy {
    fn name(&self) -> &str {
        "fallback"
    }

    fn evaluate(
        &self,
        profile: &TracerProfile,
        target: &BloomTarget,
        context: Option<&RouteContext>,
        _topology: &PathwayTopology,
        _max_path_len: usize,
    ) -> Result<ScoringOutcome, PolicyError> {
        let path = vec![
            zones::ANALYSIS_CORE.to_string(),
            zones::ATTENTION_NEXUS.to_string(),
            format!("target:{}", target.id),
        ];

        let rationale = match context.and_then(|c| c.urgency) {
            Some(urgency) => format!(
                "Generic analysis pass for '{}' specialization (caller urgency {urgency:.2})",
                profile.specialization
            ),
            None => format!(
                "Generic analysis pass for '{}' specialization",
                profile.specialization
            ),
        };

        ScoringOutcome::checked(
            self.name(),
            NEUTRAL_SCORE,
            path,
            FIXED_TIME_SECS,
            FIXED_COST,
            NEUTRAL_SCORE,
            rationale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityVector;

    #[test]
    fn test_fallback_is_neutral_and_fixed() {
        let profile = TracerProfile::new(
            "moth",
            "*",
            "light-seeking",
            (1, 3),
            (0.0, 1.0),
            vec![],
            2,
            1.0,
            0.5,
        );
        let target = BloomTarget::new("bloom-9", 7, 0.9, 0.9, QualityVector::default());

        let outcome = FallbackPolicy
            .evaluate(&profile, &target, None, &PathwayTopology::new(), 6)
            .unwrap();

        assert_eq!(outcome.score, 0.5);
        assert_eq!(outcome.success_probability, 0.5);
        assert_eq!(outcome.estimated_time, 5.0);
        assert_eq!(outcome.resource_cost, 1.0);
        assert_eq!(outcome.path.last().unwrap(), "target:bloom-9");
        assert!(outcome.rationale.contains("light-seeking"));
    }

    #[test]
    fn test_fallback_echoes_urgency_hint() {
        let profile = TracerProfile::new(
            "moth",
            "*",
            "light-seeking",
            (1, 3),
            (0.0, 1.0),
            vec![],
            2,
            1.0,
            0.5,
        );
        let target = BloomTarget::new("bloom-9", 2, 0.5, 0.5, QualityVector::default());
        let context = RouteContext::with_urgency(0.8);

        let outcome = FallbackPolicy
            .evaluate(&profile, &target, Some(&context), &PathwayTopology::new(), 6)
            .unwrap();

        assert!(outcome.rationale.contains("0.80"));
        // The hint never moves the score
        assert_eq!(outcome.score, 0.5);
    }
}
