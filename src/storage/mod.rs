//! Storage module for configuration.

pub mod config;

pub use config::{
    get_config_path, get_data_dir, load_config, load_config_from, save_config, save_config_to,
    AppConfig, ConfigError, DashboardSettings, PlanSettings,
};
