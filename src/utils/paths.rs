//! Cross-Platform Path Utilities
//!
//! Resolves the application directory (~/.portability-session/) and the
//! default config file location.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the application directory (~/.portability-session/)
pub fn app_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".portability-session"))
}

/// Get the default config file path (~/.portability-session/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(app_dir()?.join("config.json"))
}
