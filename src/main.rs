// Portability Session - Console Entry Point
// Runs one analysis session against the configured analyzer process.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use portability_session::models::settings::{LogFormat, LoggingConfig};
use portability_session::services::{
    AnalysisOrchestrator, ConsoleOutputSurface, FsReportWriter, InMemoryOptionsViewModel,
    ListingReportViewer, ProcessAnalysisEngine, SessionHost,
};
use portability_session::storage::ConfigService;
use portability_session::utils::logging::env_filter;
use portability_session_core::{InlineContext, OutputSurface, SharedDiagnosticsLog};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portability-session")]
#[command(about = "Analyze assemblies for portability and write the reports")]
struct Cli {
    /// Root artifact of the analysis
    entrypoint: String,
    /// Input artifacts to analyze (defaults to the entrypoint)
    assemblies: Vec<PathBuf>,
    /// Referenced package identifier (repeatable)
    #[arg(long = "package")]
    packages: Vec<String>,
    /// Also produce a JSON report
    #[arg(long)]
    json: bool,
    /// Config file (defaults to ~/.portability-session/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Initialize tracing based on configuration
fn initialize_tracing(logging: &LoggingConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(&logging.level, rust_log.as_deref());

    match logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(ref path) => ConfigService::from_path(path),
        None => ConfigService::new(),
    }
    .context("failed to load configuration")?;
    let config = config_service.get_config().clone();

    initialize_tracing(&config.logging);
    tracing::debug!(path = %config_service.path().display(), "configuration loaded");

    let diagnostics = SharedDiagnosticsLog::new();
    let output: Arc<dyn OutputSurface> = Arc::new(ConsoleOutputSurface::new());
    let host = SessionHost {
        context: Arc::new(InlineContext),
        view_model: Arc::new(InMemoryOptionsViewModel::new(config.options.clone())),
        output: Arc::clone(&output),
        viewer: Arc::new(ListingReportViewer::new(Arc::clone(&output))),
        engine: Arc::new(ProcessAnalysisEngine::new(
            config.analyzer.clone(),
            diagnostics.clone(),
        )),
        diagnostics: Arc::new(diagnostics),
    };

    let assemblies = if cli.assemblies.is_empty() {
        vec![PathBuf::from(&cli.entrypoint)]
    } else {
        cli.assemblies
    };

    let orchestrator = AnalysisOrchestrator::new(host);
    let result = orchestrator
        .run_session(
            &cli.entrypoint,
            &assemblies,
            &cli.packages,
            &FsReportWriter::new(),
            cli.json || config.include_json,
        )
        .await
        .context("analysis session failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
