//! Configuration module for periodic
//!
//! This module handles:
//! - User-level configuration (~/.config/periodic/config.toml)
//! - Environment overrides (PERIODIC_DATA_FILE)
//! - Forecast constants (decay, tail probability, gap thresholds)

mod user_config;

pub use user_config::{StorageConfig, UserConfig, DATA_FILE_ENV};
