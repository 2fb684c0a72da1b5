//! Core Error Types
//!
//! Defines the error type shared by the session core and its collaborators.
//! Collaborator traits (engine, viewer, coordination context) report failures
//! through `CoreError`, and the orchestrator propagates them unchanged.
//!
//! The host crate extends these with additional variants (paths, CLI) that
//! require heavier dependencies.

use thiserror::Error;

/// Core error type for the analysis session workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Switching to the coordination context failed
    #[error("Coordination context error: {0}")]
    Context(String),

    /// The external analysis engine failed
    #[error("Analysis engine error: {0}")]
    Engine(String),

    /// The report viewer failed
    #[error("Report viewer error: {0}")]
    Viewer(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a coordination context error
    pub fn context(msg: impl Into<String>) -> Self {
        Self::Context(msg.into())
    }

    /// Create an analysis engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create a report viewer error
    pub fn viewer(msg: impl Into<String>) -> Self {
        Self::Viewer(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
