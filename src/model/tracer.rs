//! Tracer capability profiles
//!
//! A profile is an immutable descriptor of one agent specialization: where
//! it works best (depth and entropy ranges), what it weighs (focus
//! dimensions), and how it spends resources. The four built-in profiles
//! carry the canonical owl/crow/spider/whale capability constants.

use serde::{Deserialize, Serialize};

/// Floor for the analysis speed multiplier; guards the time formulas
/// against division by zero
const MIN_ANALYSIS_SPEED: f64 = 0.01;

/// Usable range for resource efficiency, (0, 1]
const MIN_RESOURCE_EFFICIENCY: f64 = 0.01;

/// Immutable capability descriptor for one tracer specialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracerProfile {
    /// Unique name, matched case-insensitively by the catalog
    pub name: String,
    /// Display symbol
    pub label: String,
    /// Free-text specialization tag
    pub specialization: String,
    /// Optimal working depth range, inclusive
    pub preferred_depth_range: (u32, u32),
    /// Entropy preference range, inclusive
    pub entropy_affinity: (f64, f64),
    /// Quality dimensions this tracer weighs most heavily
    pub focus_dimensions: Vec<String>,
    /// Maximum structural connections constructed in one pass
    pub bridge_capacity: u32,
    /// Processing speed multiplier, higher is faster
    pub analysis_speed: f64,
    /// Resource usage efficiency in (0, 1], higher is cheaper
    pub resource_efficiency: f64,
}

impl TracerProfile {
    /// Create a profile, clamping the rate fields into usable ranges
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: Into<String>>(
        name: S,
        label: S,
        specialization: S,
        preferred_depth_range: (u32, u32),
        entropy_affinity: (f64, f64),
        focus_dimensions: Vec<String>,
        bridge_capacity: u32,
        analysis_speed: f64,
        resource_efficiency: f64,
    ) -> Self {
        let (depth_lo, depth_hi) = preferred_depth_range;
        let (entropy_lo, entropy_hi) = entropy_affinity;
        Self {
            name: name.into(),
            label: label.into(),
            specialization: specialization.into(),
            preferred_depth_range: (depth_lo.min(depth_hi), depth_lo.max(depth_hi)),
            entropy_affinity: (
                entropy_lo.clamp(0.0, 1.0).min(entropy_hi.clamp(0.0, 1.0)),
                entropy_lo.clamp(0.0, 1.0).max(entropy_hi.clamp(0.0, 1.0)),
            ),
            focus_dimensions,
            bridge_capacity,
            analysis_speed: analysis_speed.max(MIN_ANALYSIS_SPEED),
            resource_efficiency: resource_efficiency.clamp(MIN_RESOURCE_EFFICIENCY, 1.0),
        }
    }

    /// Deep pattern analysis specialist
    pub fn owl() -> Self {
        Self::new(
            "owl",
            "\u{1F989}",
            "deep-pattern",
            (3, 8),
            (0.3, 0.8),
            vec!["schema".to_string(), "coherence".to_string()],
            6,
            0.7,
            0.8,
        )
    }

    /// Weakness and instability detection specialist
    pub fn crow() -> Self {
        Self::new(
            "crow",
            "\u{1F426}",
            "weakness-detection",
            (1, 5),
            (0.6, 1.0),
            vec!["utility".to_string(), "pressure".to_string()],
            3,
            0.9,
            0.6,
        )
    }

    /// Token bridge construction specialist
    pub fn spider() -> Self {
        Self::new(
            "spider",
            "\u{1F577}",
            "bridge-construction",
            (2, 6),
            (0.4, 0.7),
            vec!["coherence".to_string(), "utility".to_string()],
            12,
            0.8,
            0.9,
        )
    }

    /// High-density information processing specialist
    pub fn whale() -> Self {
        Self::new(
            "whale",
            "\u{1F40B}",
            "high-density",
            (4, 10),
            (0.6, 1.0),
            vec!["schema".to_string(), "pressure".to_string()],
            8,
            0.5,
            0.7,
        )
    }
}
