//! User-level configuration for periodic
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/periodic/config.toml

use crate::forecast::ForecastConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data file location
pub const DATA_FILE_ENV: &str = "PERIODIC_DATA_FILE";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Event log location (default: <data dir>/periodic/data)
    pub data_file: Option<PathBuf>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/periodic/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::user_config_path()
            .filter(|p| p.exists())
            .map(|p| Self::load_from(&p))
            .unwrap_or_default();

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read a config file, falling back to defaults if it is unreadable or invalid
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str::<UserConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
            self.storage.data_file = Some(PathBuf::from(path));
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("periodic").join("config.toml"))
    }

    /// Resolved event log location
    pub fn data_file(&self) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(crate::storage::default_data_file)
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let example = r#"# periodic user configuration

[storage]
# Event log location (default: per-user data directory)
# data_file = "/home/me/.local/share/periodic/data"

[forecast]
# Weight multiplier per older sample (newest sample has weight 1)
# decay = 0.9
# Probability cut from each tail of the shown window
# tail_probability = 0.05
# Days covered by the probability table
# horizon_days = 100
# Bar length of the most likely day
# bar_width = 20
# Cycles needed before forecasting
# min_cycles = 3
# Gaps longer than these count as two / three missed cycles
# double_gap_days = 50
# triple_gap_days = 80
"#;
            std::fs::write(&config_path, example)?;
        }

        Ok(config_path)
    }
}
