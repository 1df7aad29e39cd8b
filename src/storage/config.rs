//! Application configuration.
//!
//! Preferences are stored as TOML in the platform configuration directory.
//! A missing file yields the defaults; command-line flags override whatever
//! is loaded here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::activities::AggregationMode;
use crate::i18n::Language;
use crate::pace::DistanceUnit;
use crate::plan::{TrainingGoal, DEFAULT_SESSIONS_PER_WEEK};

/// Default number of points shown in the pace trend.
pub const DEFAULT_PACE_TREND_POINTS: usize = 20;

/// File name of the activity log inside the data directory.
pub const ACTIVITY_LOG_FILE: &str = "activities.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Distance unit for display and input
    pub units: DistanceUnit,
    /// Interface language; detected from the system locale when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Directory with `<language-id>.ftl` files overriding built-in messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations_dir: Option<PathBuf>,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Training plan defaults
    pub plan: PlanSettings,
    /// Dashboard settings
    pub dashboard: DashboardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            units: DistanceUnit::Kilometers,
            language: None,
            translations_dir: None,
            data_dir: PathBuf::new(),
            plan: PlanSettings::default(),
            dashboard: DashboardSettings::default(),
        }
    }
}

impl AppConfig {
    /// Language to use, falling back to the system locale.
    pub fn resolved_language(&self) -> Language {
        self.language.unwrap_or_else(crate::i18n::detect_system_locale)
    }

    /// Path of the activity log file.
    pub fn activity_log_path(&self) -> PathBuf {
        self.data_dir.join(ACTIVITY_LOG_FILE)
    }
}

/// Defaults for the plan command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// Goal used when none is given
    pub default_goal: TrainingGoal,
    /// Weekly sessions used when none are given
    pub sessions_per_week: u32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            default_goal: TrainingGoal::FiveK,
            sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Volume chart grouping
    pub aggregation: AggregationMode,
    /// Maximum number of pace trend points
    pub pace_trend_points: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            aggregation: AggregationMode::Week,
            pace_trend_points: DEFAULT_PACE_TREND_POINTS,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "runplan", "RunPlan")
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;
    tracing::info!("Saved configuration to {}", path.display());

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
