//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsorg/rsorg.toml`
//! 3. Environment variables: `RSORG_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Default roster size bound: 1 MiB.
const DEFAULT_MAX_ROSTER_BYTES: u64 = 1_048_576;

/// Configuration loading failed.
#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

/// Unified configuration for rsorg.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Largest roster file the source will read, in bytes
    pub max_roster_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_roster_bytes: DEFAULT_MAX_ROSTER_BYTES,
        }
    }
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsorg").map(|dirs| dirs.config_dir().join("rsorg.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("max_roster_bytes", DEFAULT_MAX_ROSTER_BYTES)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("RSORG"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError {
        message: e.to_string(),
    }
}
