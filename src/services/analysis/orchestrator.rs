//! Analysis Session Orchestrator
//!
//! Drives one "analyze and report" session end to end:
//!
//! 1. Switch to the coordination context and show the output surface
//! 2. Refresh the options view model and resolve formats and report path
//! 3. Build the request (`RequestOptionsBuilder`)
//! 4. Run the external analysis engine
//! 5. If no report was produced, echo the issues the engine logged
//! 6. Hand the report paths to the viewer and return the analysis result
//!
//! Steps run strictly in order. Errors from the coordination context, the
//! engine, or the viewer end the session and are returned unchanged; an
//! empty report list is the only failure handled here.

use std::path::PathBuf;
use std::sync::Arc;

use portability_session_core::{
    issues_since, run_on, AnalysisEngine, CoordinationContext, CoreResult, DiagnosticsLog,
    OptionsViewModel, OutputSurface, ReportViewer, ReportWriter,
};
use serde_json::Value;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::messages::Advisory;
use super::options_builder::{RequestInputs, RequestOptionsBuilder};

/// Collaborators a session runs against.
#[derive(Clone)]
pub struct SessionHost {
    pub context: Arc<dyn CoordinationContext>,
    pub view_model: Arc<dyn OptionsViewModel>,
    pub output: Arc<dyn OutputSurface>,
    pub viewer: Arc<dyn ReportViewer>,
    pub engine: Arc<dyn AnalysisEngine>,
    pub diagnostics: Arc<dyn DiagnosticsLog>,
}

/// Entry point for analysis sessions.
pub struct AnalysisOrchestrator {
    host: SessionHost,
    options_builder: RequestOptionsBuilder,
}

impl AnalysisOrchestrator {
    pub fn new(host: SessionHost) -> Self {
        let options_builder = RequestOptionsBuilder::new(
            Arc::clone(&host.view_model),
            Arc::clone(&host.output),
            Arc::clone(&host.context),
        );
        Self {
            host,
            options_builder,
        }
    }

    /// Run one session and return the engine's analysis result.
    pub async fn run_session(
        &self,
        entrypoint: &str,
        assembly_paths: &[PathBuf],
        installed_packages: &[String],
        report_writer: &dyn ReportWriter,
        include_json: bool,
    ) -> CoreResult<Value> {
        let session_id = Uuid::new_v4();
        let span = info_span!("analysis_session", session_id = %session_id, entrypoint);

        self.run_session_steps(
            entrypoint,
            assembly_paths,
            installed_packages,
            report_writer,
            include_json,
        )
        .instrument(span)
        .await
    }

    async fn run_session_steps(
        &self,
        entrypoint: &str,
        assembly_paths: &[PathBuf],
        installed_packages: &[String],
        report_writer: &dyn ReportWriter,
        include_json: bool,
    ) -> CoreResult<Value> {
        let host = &self.host;

        host.context.switch_to().await?;
        host.output.show().await?;
        host.view_model.update().await?;

        let snapshot = host.view_model.snapshot();
        let inputs = RequestInputs {
            entrypoint: entrypoint.to_string(),
            assembly_paths: assembly_paths.to_vec(),
            formats: snapshot.selected_formats(),
            referenced_packages: installed_packages.to_vec(),
            report_path: snapshot.report_path(),
        };

        let request = self.options_builder.build(inputs).await?;
        let issues_before = host.diagnostics.len();

        info!(
            assemblies = request.input_assemblies().len(),
            targets = request.target_platforms().len(),
            include_json,
            "starting analysis"
        );
        let outcome = host
            .engine
            .analyze(&request, include_json, report_writer)
            .await?;

        run_on(host.context.as_ref(), async {
            if outcome.is_empty() {
                let issues = issues_since(host.diagnostics.as_ref(), issues_before);
                warn!(issues = issues.len(), "analysis produced no reports");
                for issue in issues {
                    host.output.write_line(&Advisory::Issue(issue).to_string());
                }
            } else {
                debug!(reports = outcome.paths.len(), "analysis produced reports");
            }

            host.viewer.view(&outcome.paths).await
        })
        .await?;

        Ok(outcome.result)
    }
}
