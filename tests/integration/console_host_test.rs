//! Console Host Integration Tests
//!
//! Runs full sessions with the console collaborators and a shell script
//! standing in for the analyzer process.

#![cfg(unix)]

use std::path::Path;
use std::sync::Arc;

use portability_session::models::settings::AnalyzerConfig;
use portability_session::services::analysis::{Advisory, AnalysisOrchestrator, SessionHost};
use portability_session::services::host::{
    BufferedOutputSurface, FsReportWriter, InMemoryOptionsViewModel, ListingReportViewer,
    ProcessAnalysisEngine,
};
use portability_session_core::{
    CoreError, DiagnosticsLog, InlineContext, OptionsSnapshot, PlatformVersion,
    SharedDiagnosticsLog, TargetPlatform,
};
use tempfile::TempDir;

struct ConsoleSession {
    output: Arc<BufferedOutputSurface>,
    log: SharedDiagnosticsLog,
    orchestrator: AnalysisOrchestrator,
}

fn console_session(temp: &TempDir, script: &str) -> ConsoleSession {
    let options = OptionsSnapshot {
        targets: vec![TargetPlatform::new(
            ".NET Core",
            vec![PlatformVersion::of_platform(".NET Core", "3.1", true)],
        )],
        output_directory: temp.path().join("reports"),
        default_output_name: "Portability".to_string(),
        ..OptionsSnapshot::default()
    };

    let log = SharedDiagnosticsLog::new();
    let output = Arc::new(BufferedOutputSurface::new());
    let host = SessionHost {
        context: Arc::new(InlineContext),
        view_model: Arc::new(InMemoryOptionsViewModel::new(options)),
        output: output.clone(),
        viewer: Arc::new(ListingReportViewer::new(output.clone())),
        engine: Arc::new(ProcessAnalysisEngine::new(
            AnalyzerConfig {
                command: "sh".to_string(),
                args: vec!["-c".to_string(), script.to_string()],
                timeout_secs: 10,
            },
            log.clone(),
        )),
        diagnostics: Arc::new(log.clone()),
    };

    ConsoleSession {
        output,
        log,
        orchestrator: AnalysisOrchestrator::new(host),
    }
}

async fn run(session: &ConsoleSession) -> Result<serde_json::Value, CoreError> {
    session
        .orchestrator
        .run_session(
            "app.dll",
            &[Path::new("app.dll").to_path_buf()],
            &[],
            &FsReportWriter::new(),
            true,
        )
        .await
}

#[tokio::test]
async fn test_reports_written_and_listed() {
    let temp = TempDir::new().unwrap();
    let session = console_session(
        &temp,
        r#"cat > /dev/null; echo '{"reports":[{"extension":"html","content":"<h1>ok</h1>"},{"extension":"json","content":"{}"}],"result":{"portable":true}}'"#,
    );

    let result = run(&session).await.unwrap();

    let html = temp.path().join("reports").join("Portability.html");
    let json = temp.path().join("reports").join("Portability.json");
    assert_eq!(result, serde_json::json!({"portable": true}));
    assert_eq!(std::fs::read_to_string(&html).unwrap(), "<h1>ok</h1>");
    assert!(json.exists());
    assert_eq!(
        session.output.lines(),
        vec![
            format!("Report: {}", html.display()),
            format!("Report: {}", json.display()),
        ]
    );
    assert_eq!(session.output.show_count(), 1);
}

#[tokio::test]
async fn test_analyzer_issues_relayed_when_no_report() {
    let temp = TempDir::new().unwrap();
    let session = console_session(
        &temp,
        r#"cat > /dev/null; echo 'Unable to resolve app.dll' >&2; echo 'Service unreachable' >&2; echo '{"reports":[]}'"#,
    );
    session.log.push("left over from another session");

    run(&session).await.unwrap();

    assert_eq!(
        session.output.lines(),
        vec![
            Advisory::Issue("Unable to resolve app.dll".to_string()).to_string(),
            Advisory::Issue("Service unreachable".to_string()).to_string(),
            "No reports were generated.".to_string(),
        ]
    );
    assert_eq!(session.log.len(), 3);
}

#[tokio::test]
async fn test_second_session_does_not_overwrite_reports() {
    let temp = TempDir::new().unwrap();
    let session = console_session(
        &temp,
        r#"cat > /dev/null; echo '{"reports":[{"extension":"html","content":"x"}]}'"#,
    );

    run(&session).await.unwrap();
    run(&session).await.unwrap();

    let reports = temp.path().join("reports");
    assert!(reports.join("Portability.html").exists());
    assert!(reports.join("Portability (1).html").exists());
}

#[tokio::test]
async fn test_analyzer_failure_is_fatal() {
    let temp = TempDir::new().unwrap();
    let session = console_session(&temp, "cat > /dev/null; exit 2");

    let err = run(&session).await.unwrap_err();

    assert!(matches!(err, CoreError::Engine(_)));
    assert!(!session
        .output
        .lines()
        .iter()
        .any(|l| l.starts_with("Report:") || l.starts_with("No reports")));
}

#[tokio::test]
async fn test_analyzer_receives_request_json() {
    let temp = TempDir::new().unwrap();
    let capture = temp.path().join("request.json");
    let script = format!(
        r#"cat > '{}'; echo '{{"reports":[]}}'"#,
        capture.display()
    );
    let session = console_session(&temp, &script);

    run(&session).await.unwrap();

    let sent: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&capture).unwrap()).unwrap();
    assert_eq!(sent["includeJson"], serde_json::json!(true));
    assert_eq!(sent["request"]["entrypoint"], "app.dll");
    assert_eq!(
        sent["request"]["targetPlatforms"],
        serde_json::json!([".NET Core, Version=3.1"])
    );
    assert_eq!(sent["request"]["requestFlags"], serde_json::json!(1));
    assert_eq!(
        sent["request"]["inputAssemblies"][0]["secondaryFlag"],
        serde_json::json!(false)
    );
}
