/*!
 * Tests for configuration loading, defaults and validation.
 */

use ocrdiff::app_config::{Config, LogLevel, OcrProviderType};

#[test]
fn test_config_roundTrip_throughJsonFile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.provider = OcrProviderType::Mock;
    config.usage.monthly_limit = 42;
    config.log_level = LogLevel::Debug;
    config.save(&path).expect("save");

    let loaded = Config::from_file(&path).expect("load");
    assert_eq!(loaded.provider, OcrProviderType::Mock);
    assert_eq!(loaded.usage.monthly_limit, 42);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_config_fromFileOrDefault_createsMissingFile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.json");
    assert!(!path.exists());

    let config = Config::from_file_or_default(&path).expect("create default");
    assert!(path.exists());
    assert_eq!(config.usage.monthly_limit, 1000);
}

#[test]
fn test_config_partialJson_keepsDefaultsForMissingFields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"provider":"mock","comparison":{"min_word_length":4}}"#)
        .expect("write config");

    let config = Config::from_file(&path).expect("load");
    assert_eq!(config.provider, OcrProviderType::Mock);
    assert_eq!(config.comparison.min_word_length, 4);
    assert_eq!(config.comparison.fuzzy_threshold, 0.8);
    assert_eq!(config.usage.usage_file, "usage.json");
}

#[test]
fn test_config_invalidValues_failValidation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"usage":{"monthly_limit":0}}"#).expect("write config");

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_config_malformedJson_failsWithContext() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").expect("write config");

    let err = Config::from_file(&path).expect_err("should fail");
    assert!(format!("{:#}", err).contains("parse"));
}
