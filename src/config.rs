//! Configuration for the routing engine
//!
//! All knobs are supplied at construction time and are not runtime-mutable.
//! Defaults mirror the reference behavior: a 300 second cache window, a 0.3
//! viability threshold, and a 50-entry history window.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Routing engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Route cache time-to-live in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Minimum success probability for a route to be considered viable
    #[serde(default = "default_min_success_probability")]
    pub min_success_probability: f64,

    /// Maximum number of stages in a synthesized route path
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,

    /// Number of history records retained before trimming
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Bound on the active-route buffer (oldest entries are evicted)
    #[serde(default = "default_active_route_capacity")]
    pub active_route_capacity: usize,
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_min_success_probability() -> f64 {
    0.3
}

fn default_max_path_length() -> usize {
    6
}

fn default_history_capacity() -> usize {
    50
}

fn default_active_route_capacity() -> usize {
    100
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            min_success_probability: default_min_success_probability(),
            max_path_length: default_max_path_length(),
            history_capacity: default_history_capacity(),
            active_route_capacity: default_active_route_capacity(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "cache_ttl_secs must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_success_probability) {
            return Err(ConfigError::InvalidConfig(format!(
                "min_success_probability {} must be within [0.0, 1.0]",
                self.min_success_probability
            )));
        }
        // A path always carries at least an entry zone and the target stage
        if self.max_path_length < 3 {
            return Err(ConfigError::InvalidConfig(
                "max_path_length must be at least 3".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.active_route_capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "active_route_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RouterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.min_success_probability, 0.3);
        assert_eq!(config.max_path_length, 6);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.active_route_capacity, 100);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: RouterConfig = toml::from_str("cache_ttl_secs = 60").unwrap();
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.min_success_probability, 0.3);
        assert_eq!(config.max_path_length, 6);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = RouterConfig {
            cache_ttl_secs: 0,
            ..RouterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = RouterConfig {
            min_success_probability: 1.5,
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RouterConfig {
            min_success_probability: -0.1,
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_path_length_rejected() {
        let config = RouterConfig {
            max_path_length: 2,
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_capacities_rejected() {
        let config = RouterConfig {
            history_capacity: 0,
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RouterConfig {
            active_route_capacity: 0,
            ..RouterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
