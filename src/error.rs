//! Error types for the tracer routing engine
//!
//! Every failure here is local and non-fatal: the engine never retries
//! internally and never panics on a routing request. Caller errors
//! (unknown tracer, missing target) are distinguished from scored attempts
//! that fail (below threshold, policy fault) because only the latter move
//! the statistics counters.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for routing operations
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unknown tracer type: '{name}' is not registered in the catalog")]
    UnknownTracerType { name: String },

    #[error("Bloom target not found: '{id}'")]
    TargetNotFound { id: String },

    #[error(
        "No viable route for {tracer_type} -> {target_id}: \
         success probability {success_probability:.3} below threshold {threshold:.3}"
    )]
    NoViableRoute {
        tracer_type: String,
        target_id: String,
        success_probability: f64,
        threshold: f64,
    },

    #[error("Scoring policy failed for tracer '{tracer_type}': {message}")]
    PolicyComputation { tracer_type: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RouteError {
    /// Create an unknown-tracer-type error
    pub fn unknown_tracer_type<S: Into<String>>(name: S) -> Self {
        Self::UnknownTracerType { name: name.into() }
    }

    /// Create a target-not-found error
    pub fn target_not_found<S: Into<String>>(id: S) -> Self {
        Self::TargetNotFound { id: id.into() }
    }

    /// Create a policy computation error
    pub fn policy_computation<S: Into<String>, M: Into<String>>(tracer_type: S, message: M) -> Self {
        Self::PolicyComputation {
            tracer_type: tracer_type.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by bad caller input rather than a scored
    /// routing attempt. Caller errors leave the statistics untouched.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RouteError::UnknownTracerType { .. } | RouteError::TargetNotFound { .. }
        )
    }

    /// True when the route was scored but rejected by the viability threshold
    pub fn is_no_viable_route(&self) -> bool {
        matches!(self, RouteError::NoViableRoute { .. })
    }
}

/// Result type for routing operations
pub type RouterResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tracer_type_display() {
        let error = RouteError::unknown_tracer_type("sparrow");
        assert_eq!(
            error.to_string(),
            "Unknown tracer type: 'sparrow' is not registered in the catalog"
        );
        assert!(error.is_caller_error());
    }

    #[test]
    fn test_target_not_found_display() {
        let error = RouteError::target_not_found("bloom-42");
        assert!(error.to_string().contains("bloom-42"));
        assert!(error.is_caller_error());
    }

    #[test]
    fn test_no_viable_route_formatting() {
        let error = RouteError::NoViableRoute {
            tracer_type: "crow".to_string(),
            target_id: "bloom-1".to_string(),
            success_probability: 0.125,
            threshold: 0.3,
        };

        let message = error.to_string();
        assert!(message.contains("crow -> bloom-1"));
        assert!(message.contains("0.125"));
        assert!(message.contains("0.300"));
        assert!(error.is_no_viable_route());
        assert!(!error.is_caller_error());
    }

    #[test]
    fn test_policy_computation_constructor() {
        let error = RouteError::policy_computation("owl", "non-finite score");
        assert!(matches!(error, RouteError::PolicyComputation { .. }));
        assert_eq!(
            error.to_string(),
            "Scoring policy failed for tracer 'owl': non-finite score"
        );
        assert!(!error.is_caller_error());
    }
}
