//! Settings Models
//!
//! Host configuration stored in config.json.

use portability_session_core::OptionsSnapshot;
use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error"
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// External analyzer process settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Executable that performs the analysis
    pub command: String,
    /// Extra arguments passed before the request is piped on stdin
    #[serde(default)]
    pub args: Vec<String>,
    /// Seconds to wait for the analyzer before giving up
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            command: "apiport-analyzer".to_string(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Produce a JSON report next to the selected formats
    #[serde(default)]
    pub include_json: bool,
    /// Initial state of the options view model
    #[serde(default)]
    pub options: OptionsSnapshot,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl SessionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.analyzer.command.trim().is_empty() {
            return Err("analyzer.command cannot be empty".to_string());
        }

        if self.analyzer.timeout_secs == 0 {
            return Err("analyzer.timeout_secs must be at least 1 second".to_string());
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.options.default_output_name.trim().is_empty() {
            return Err("options.defaultOutputName cannot be empty".to_string());
        }

        Ok(())
    }
}
