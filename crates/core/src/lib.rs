//! Portability Session Core
//!
//! Foundational types and collaborator traits for running a portability
//! analysis session inside a host application. This crate has no dependency
//! on any concrete host (console, IDE, process-backed engine).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `context` - Coordination context capability (`CoordinationContext`, `run_on`)
//! - `request` - Immutable request and outcome types
//! - `builders` - `AnalysisRequestBuilder`
//! - `options` - Options view model snapshot types
//! - `host` - Collaborator traits (view model, output, viewer, writer, engine)
//! - `diagnostics` - Process-wide diagnostics log and the session relay

pub mod builders;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod options;
pub mod request;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Coordination Context ───────────────────────────────────────────────
pub use context::{run_on, CoordinationContext, InlineContext};

// ── Request Model ──────────────────────────────────────────────────────
pub use builders::AnalysisRequestBuilder;
pub use request::{AnalysisOutcome, AnalysisRequest, InputAssembly, RequestFlags};

// ── Options Snapshot ───────────────────────────────────────────────────
pub use options::{OptionsSnapshot, PlatformVersion, SelectableFormat, TargetPlatform};

// ── Collaborators ──────────────────────────────────────────────────────
pub use host::{AnalysisEngine, OptionsViewModel, OutputSurface, ReportViewer, ReportWriter};

// ── Diagnostics ────────────────────────────────────────────────────────
pub use diagnostics::{issues_since, DiagnosticsLog, SharedDiagnosticsLog};
