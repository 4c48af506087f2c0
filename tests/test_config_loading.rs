//! Configuration loading and validation tests
//!
//! Tests observable behavior of TOML loading, field defaults and the
//! validation pass, not TOML parsing internals.

use std::io::Write;
use tempfile::NamedTempFile;
use tracer_router::{ConfigError, RouterConfig, RoutingEngine};

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
cache_ttl_secs = 120
min_success_probability = 0.5
max_path_length = 8
history_capacity = 200
active_route_capacity = 64
"#
    )
    .unwrap();

    let config = RouterConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.cache_ttl_secs, 120);
    assert_eq!(config.min_success_probability, 0.5);
    assert_eq!(config.max_path_length, 8);
    assert_eq!(config.history_capacity, 200);
    assert_eq!(config.active_route_capacity, 64);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "min_success_probability = 0.45").unwrap();

    let config = RouterConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.min_success_probability, 0.45);
    assert_eq!(config.cache_ttl_secs, 300);
    assert_eq!(config.max_path_length, 6);
    assert_eq!(config.history_capacity, 50);
}

#[test]
fn test_empty_file_yields_full_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = RouterConfig::load_from_file(temp_file.path()).unwrap();
    assert_eq!(config, RouterConfig::default());
}

#[test]
fn test_invalid_values_are_rejected_at_load() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "min_success_probability = 2.0").unwrap();

    let error = RouterConfig::load_from_file(temp_file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidConfig(_)));
    assert!(error.to_string().contains("min_success_probability"));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "cache_ttl_secs = [not a number").unwrap();

    let error = RouterConfig::load_from_file(temp_file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::TomlParse(_)));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let error =
        RouterConfig::load_from_file(std::path::Path::new("/nonexistent/router.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::FileRead(_)));
}

#[test]
fn test_engine_reflects_loaded_configuration() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "cache_ttl_secs = 42").unwrap();

    let config = RouterConfig::load_from_file(temp_file.path()).unwrap();
    let engine = RoutingEngine::new(config);

    assert_eq!(engine.config().cache_ttl_secs, 42);
    assert_eq!(engine.config().min_success_probability, 0.3);
}
