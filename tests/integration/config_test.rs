//! Integration tests for configuration files.

use runplan::activities::AggregationMode;
use runplan::i18n::Language;
use runplan::pace::DistanceUnit;
use runplan::plan::TrainingGoal;
use runplan::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.units, DistanceUnit::Kilometers);
    assert_eq!(config.plan.default_goal, TrainingGoal::FiveK);
    assert!(config.activity_log_path().ends_with("activities.json"));
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("runplan").join("config.toml");

    let mut config = AppConfig::default();
    config.units = DistanceUnit::Miles;
    config.language = Some(Language::French);
    config.plan.default_goal = TrainingGoal::HalfMarathon;
    config.plan.sessions_per_week = 6;
    config.dashboard.aggregation = AggregationMode::Month;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.units, DistanceUnit::Miles);
    assert_eq!(loaded.language, Some(Language::French));
    assert_eq!(loaded.plan, config.plan);
    assert_eq!(loaded.dashboard, config.dashboard);
}

#[test]
fn test_saved_file_is_readable_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    save_config_to(&AppConfig::default(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("units = \"km\""));
    assert!(content.contains("[plan]"));
    assert!(content.contains("default_goal = \"5k\""));
    assert!(!content.contains("language"));
}

#[test]
fn test_invalid_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "units = \"leagues\"").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}
