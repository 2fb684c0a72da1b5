//! JSON Configuration Loading
//!
//! Reads the host configuration file. The file is never written back; a
//! missing file simply yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::SessionConfig;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Configuration service for the host settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: SessionConfig,
}

impl ConfigService {
    /// Load the config from the default location (~/.portability-session/config.json)
    pub fn new() -> AppResult<Self> {
        Self::from_path(config_path()?)
    }

    /// Load the config from `path`, falling back to defaults if it does not exist
    pub fn from_path(path: impl Into<PathBuf>) -> AppResult<Self> {
        let config_path = path.into();
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
            SessionConfig::default()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<SessionConfig> {
        let content = fs::read_to_string(path)?;
        let config: SessionConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &SessionConfig {
        &self.config
    }

    /// Path the configuration was resolved from
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
