//! # Configuration Tests
//!
//! Defaults, partial JSON, aliases, and file loading.

use std::io::Write;

use mipsviz_core::common::{ConfigError, RegisterNaming};
use mipsviz_core::config::*;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_cycles);
    assert_eq!(config.clock.tick_interval_ms, 1000);
    assert_eq!(config.clock.max_ticks, None);
    assert_eq!(config.display.register_names, RegisterNaming::Numeric);
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "clock": { "max_ticks": 12 } }"#).unwrap();
    assert_eq!(config.clock.tick_interval_ms, 1000);
    assert_eq!(config.clock.max_ticks, Some(12));
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn test_full_config() {
    let config = Config::from_json(
        r#"{
            "general": { "trace_cycles": true },
            "clock": { "tick_interval_ms": 0, "max_ticks": null },
            "display": { "register_names": "ABI" }
        }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        Config {
            general: GeneralConfig { trace_cycles: true },
            clock: ClockConfig {
                tick_interval_ms: 0,
                max_ticks: None,
            },
            display: DisplayConfig {
                register_names: RegisterNaming::Abi,
            },
        }
    );
}

#[test]
fn test_invalid_naming_is_rejected() {
    let err = Config::from_json(r#"{ "display": { "register_names": "Roman" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "clock": {{ "tick_interval_ms": 250 }} }}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.clock.tick_interval_ms, 250);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
