//! Bloom targets and their quality attributes
//!
//! All bounded fields are clamped into range at construction rather than
//! rejected: callers supplying out-of-range values get silently clamped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Value read for any quality dimension a caller never set
const DEFAULT_DIMENSION_VALUE: f64 = 0.5;

/// Lifecycle/stability tag of a bloom target
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebloomStatus {
    #[default]
    Stable,
    Reblooming,
    Emerging,
    Fragmenting,
    Unstable,
}

impl RebloomStatus {
    /// Statuses indicating active structural change
    pub fn is_transitional(&self) -> bool {
        matches!(self, RebloomStatus::Reblooming | RebloomStatus::Emerging)
    }

    /// Statuses indicating structural decay
    pub fn is_degrading(&self) -> bool {
        matches!(self, RebloomStatus::Fragmenting | RebloomStatus::Unstable)
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            RebloomStatus::Stable => "stable",
            RebloomStatus::Reblooming => "reblooming",
            RebloomStatus::Emerging => "emerging",
            RebloomStatus::Fragmenting => "fragmenting",
            RebloomStatus::Unstable => "unstable",
        }
    }
}

impl fmt::Display for RebloomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown rebloom status: '{0}'")]
pub struct ParseRebloomStatusError(pub String);

impl FromStr for RebloomStatus {
    type Err = ParseRebloomStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" => Ok(RebloomStatus::Stable),
            "reblooming" => Ok(RebloomStatus::Reblooming),
            "emerging" => Ok(RebloomStatus::Emerging),
            "fragmenting" => Ok(RebloomStatus::Fragmenting),
            "unstable" => Ok(RebloomStatus::Unstable),
            other => Err(ParseRebloomStatusError(other.to_string())),
        }
    }
}

/// Named-dimension quality bundle for a bloom target
///
/// The well-known dimensions are `schema`, `coherence`, `utility` and
/// `pressure`; arbitrary extra dimensions are allowed. Any dimension that
/// was never set reads as 0.5. Values are clamped to [0, 1] on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityVector {
    dimensions: HashMap<String, f64>,
}

impl QualityVector {
    pub const SCHEMA: &'static str = "schema";
    pub const COHERENCE: &'static str = "coherence";
    pub const UTILITY: &'static str = "utility";
    pub const PRESSURE: &'static str = "pressure";

    /// Create a quality vector from `(dimension, value)` pairs, clamping
    /// every value into [0, 1]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let dimensions = values
            .into_iter()
            .map(|(name, value)| (name.into(), value.clamp(0.0, 1.0)))
            .collect();
        Self { dimensions }
    }

    /// Convenience constructor for the four well-known dimensions
    pub fn scup(schema: f64, coherence: f64, utility: f64, pressure: f64) -> Self {
        Self::new([
            (Self::SCHEMA, schema),
            (Self::COHERENCE, coherence),
            (Self::UTILITY, utility),
            (Self::PRESSURE, pressure),
        ])
    }

    /// Read a dimension; unset dimensions default to 0.5
    pub fn get(&self, dimension: &str) -> f64 {
        self.dimensions
            .get(dimension)
            .copied()
            .unwrap_or(DEFAULT_DIMENSION_VALUE)
    }

    /// Set a dimension, clamping the value into [0, 1]
    pub fn set<S: Into<String>>(&mut self, dimension: S, value: f64) {
        self.dimensions
            .insert(dimension.into(), value.clamp(0.0, 1.0));
    }

    /// Mean over the named dimensions, or 0.5 for an empty selection
    pub fn mean_of(&self, dimensions: &[String]) -> f64 {
        if dimensions.is_empty() {
            return DEFAULT_DIMENSION_VALUE;
        }
        let sum: f64 = dimensions.iter().map(|d| self.get(d)).sum();
        sum / dimensions.len() as f64
    }

    /// Names of all explicitly set dimensions
    pub fn dimension_names(&self) -> Vec<&str> {
        self.dimensions.keys().map(String::as_str).collect()
    }
}

/// A unit of analyzable work with structural and quality attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomTarget {
    /// Unique identifier
    pub id: String,
    /// Structural nesting level, at least 1
    pub depth: u32,
    /// Disorder level in [0, 1]
    pub entropy: f64,
    /// Processing complexity in [0, 1]
    pub complexity: f64,
    /// Quality dimension bundle
    pub quality: QualityVector,
    /// Information token density in [0, 1]
    pub token_density: f64,
    /// Lifecycle/stability tag
    pub status: RebloomStatus,
    /// Refreshed on every registry insert or overwrite
    pub last_updated: DateTime<Utc>,
}

impl BloomTarget {
    /// Create a target with defaulted token density (0.5) and stable status.
    /// Out-of-range inputs are clamped, not rejected.
    pub fn new<S: Into<String>>(
        id: S,
        depth: u32,
        entropy: f64,
        complexity: f64,
        quality: QualityVector,
    ) -> Self {
        Self {
            id: id.into(),
            depth: depth.max(1),
            entropy: entropy.clamp(0.0, 1.0),
            complexity: complexity.clamp(0.0, 1.0),
            quality,
            token_density: DEFAULT_DIMENSION_VALUE,
            status: RebloomStatus::Stable,
            last_updated: Utc::now(),
        }
    }

    /// Builder method to set token density (clamped)
    pub fn with_token_density(mut self, token_density: f64) -> Self {
        self.token_density = token_density.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set the rebloom status
    pub fn with_status(mut self, status: RebloomStatus) -> Self {
        self.status = status;
        self
    }

    /// Refresh the last-updated timestamp to now
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
