//! Portability Session - Host Library
//!
//! Runs "analyze and report" portability sessions on top of
//! `portability-session-core`. It includes:
//! - Session services (request options builder, orchestrator)
//! - Console host collaborators (output surface, viewer, view model,
//!   report writer, process-backed analysis engine)
//! - Configuration loading
//! - Data models and utilities

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::settings::{AnalyzerConfig, LogFormat, LoggingConfig, SessionConfig};
pub use services::analysis::{AnalysisOrchestrator, RequestOptionsBuilder, SessionHost};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
