//! Process-Backed Analysis Engine
//!
//! Runs an external analyzer executable for each request:
//!
//! - stdin: `{"request": <AnalysisRequest>, "includeJson": bool}`
//! - stderr: one issue per non-empty line, appended to the diagnostics log
//! - stdout: `{"reports": [{"extension": "html", "content": "..."}], "result": <any>}`
//!
//! Each report is written through the session's `ReportWriter` next to the
//! request's output file name. A non-zero exit, a timeout, or unparseable
//! stdout is an engine error.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use portability_session_core::{
    AnalysisEngine, AnalysisOutcome, AnalysisRequest, CoreError, CoreResult, ReportWriter,
    SharedDiagnosticsLog,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, info};

use crate::models::settings::AnalyzerConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzerInput<'a> {
    request: &'a AnalysisRequest,
    include_json: bool,
}

#[derive(Debug, Deserialize)]
struct AnalyzerOutput {
    #[serde(default)]
    reports: Vec<AnalyzerReport>,
    #[serde(default)]
    result: Value,
}

#[derive(Debug, Deserialize)]
struct AnalyzerReport {
    extension: String,
    content: String,
}

/// Analysis engine that shells out to an analyzer process.
pub struct ProcessAnalysisEngine {
    config: AnalyzerConfig,
    diagnostics: SharedDiagnosticsLog,
}

impl ProcessAnalysisEngine {
    pub fn new(config: AnalyzerConfig, diagnostics: SharedDiagnosticsLog) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    /// Split the request's output file name into directory and base name.
    fn report_location(request: &AnalysisRequest) -> CoreResult<(PathBuf, String)> {
        let output = request.output_file_name();
        let file_name = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CoreError::engine(format!(
                    "Output file name '{}' has no file component",
                    output.display()
                ))
            })?;
        let directory = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Ok((directory, file_name))
    }

    async fn run_analyzer(&self, input: &[u8]) -> CoreResult<std::process::Output> {
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        // dropping the child on timeout kills it
        match timeout(timeout_duration, self.spawn_and_wait(input)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::engine(format!(
                "Analyzer timed out after {} seconds",
                self.config.timeout_secs
            ))),
        }
    }

    /// Spawn the analyzer, feed `input` on stdin while draining stdout and
    /// stderr, and wait for it to exit.
    async fn spawn_and_wait(&self, input: &[u8]) -> CoreResult<std::process::Output> {
        let mut cmd = Command::new(&self.config.command);
        cmd.args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| {
            CoreError::engine(format!(
                "Failed to start analyzer '{}': {}",
                self.config.command, e
            ))
        })?;

        let stdin = child.stdin.take();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(input).await {
                Ok(()) => Ok(()),
                // analyzer exited without reading its input
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                Err(e) => Err(e),
            }
            // stdin is closed here so the analyzer sees EOF
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        fed?;
        output.map_err(|e| CoreError::engine(format!("Analyzer failed: {}", e)))
    }

    fn record_issues(&self, stderr: &[u8]) -> usize {
        let text = String::from_utf8_lossy(stderr);
        let mut recorded = 0;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            self.diagnostics.push(line);
            recorded += 1;
        }
        recorded
    }
}

#[async_trait]
impl AnalysisEngine for ProcessAnalysisEngine {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
        include_json: bool,
        writer: &dyn ReportWriter,
    ) -> CoreResult<AnalysisOutcome> {
        let (directory, file_name) = Self::report_location(request)?;
        let input = serde_json::to_vec(&AnalyzerInput {
            request,
            include_json,
        })?;

        info!(command = %self.config.command, "running analyzer");
        let output = self.run_analyzer(&input).await?;

        let issues = self.record_issues(&output.stderr);
        debug!(issues, status = ?output.status.code(), "analyzer finished");

        if !output.status.success() {
            return Err(CoreError::engine(format!(
                "Analyzer exited with code {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let parsed: AnalyzerOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| CoreError::engine(format!("Invalid analyzer output: {}", e)))?;

        let mut paths = Vec::with_capacity(parsed.reports.len());
        for report in &parsed.reports {
            let path = writer
                .write_report(
                    report.content.as_bytes(),
                    &report.extension,
                    &directory,
                    &file_name,
                    false,
                )
                .await?;
            paths.push(path);
        }

        Ok(AnalysisOutcome::new(paths, parsed.result))
    }
}
