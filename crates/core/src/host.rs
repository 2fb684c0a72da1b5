//! Host Collaborator Traits
//!
//! Narrow contracts for everything the session talks to but does not own:
//! the options view model, the output surface, the report viewer, the report
//! writer, and the external analysis engine.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::options::OptionsSnapshot;
use crate::request::{AnalysisOutcome, AnalysisRequest};

/// The host's options UI state.
#[async_trait]
pub trait OptionsViewModel: Send + Sync {
    /// Refresh the state from the UI. Must be awaited before `snapshot()`.
    /// Calling it repeatedly without user edits in between is a no-op.
    async fn update(&self) -> CoreResult<()>;

    /// Current state as plain data.
    fn snapshot(&self) -> OptionsSnapshot;
}

/// Text output pane of the host.
#[async_trait]
pub trait OutputSurface: Send + Sync {
    /// Activate and show the pane.
    async fn show(&self) -> CoreResult<()>;

    /// Append one line.
    fn write_line(&self, text: &str);
}

/// Displays produced reports to the user.
#[async_trait]
pub trait ReportViewer: Send + Sync {
    /// Display `paths`. Called even when the list is empty.
    async fn view(&self, paths: &[PathBuf]) -> CoreResult<()>;
}

/// Persists report bytes on behalf of the analysis engine.
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write `contents` to `{directory}/{file_name}.{extension}` and return
    /// the path actually written. Without `overwrite`, an existing file is
    /// kept and a free name is chosen instead.
    async fn write_report(
        &self,
        contents: &[u8],
        extension: &str,
        directory: &Path,
        file_name: &str,
        overwrite: bool,
    ) -> CoreResult<PathBuf>;
}

/// The external engine that performs the portability analysis.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Analyze `request` and write its reports through `writer`. With
    /// `include_json`, a JSON report is produced in addition to the requested
    /// formats.
    async fn analyze(
        &self,
        request: &AnalysisRequest,
        include_json: bool,
        writer: &dyn ReportWriter,
    ) -> CoreResult<AnalysisOutcome>;
}
