//! Request Options Builder Integration Tests
//!
//! Exercises `RequestOptionsBuilder` against the in-memory view model, so
//! pending user edits and refresh behaviour are covered together.

use std::path::PathBuf;
use std::sync::Arc;

use portability_session::services::analysis::{Advisory, RequestInputs, RequestOptionsBuilder};
use portability_session::services::host::{
    BufferedOutputSurface, InMemoryOptionsViewModel, OptionsEdit,
};
use portability_session_core::{
    InlineContext, OptionsSnapshot, OptionsViewModel, PlatformVersion, RequestFlags,
    TargetPlatform,
};

fn initial_options() -> OptionsSnapshot {
    OptionsSnapshot {
        targets: vec![
            TargetPlatform::new(
                ".NET Core",
                vec![
                    PlatformVersion::of_platform(".NET Core", "2.0", false),
                    PlatformVersion::of_platform(".NET Core", "3.1", false),
                ],
            ),
            TargetPlatform::new(
                ".NET Standard",
                vec![PlatformVersion::of_platform(".NET Standard", "2.0", false)],
            ),
        ],
        invalid_targets: vec![TargetPlatform::new(
            "Silverlight",
            vec![PlatformVersion::of_platform("Silverlight", "5.0", false)],
        )],
        ..OptionsSnapshot::default()
    }
}

fn inputs() -> RequestInputs {
    RequestInputs {
        entrypoint: "app.dll".to_string(),
        assembly_paths: vec![PathBuf::from("bin/app.dll"), PathBuf::from("bin/lib.dll")],
        formats: vec!["HTML".to_string()],
        referenced_packages: Vec::new(),
        report_path: PathBuf::from("/reports/ApiPortAnalysis"),
    }
}

struct Fixture {
    view_model: Arc<InMemoryOptionsViewModel>,
    output: Arc<BufferedOutputSurface>,
    builder: RequestOptionsBuilder,
}

fn fixture() -> Fixture {
    let view_model = Arc::new(InMemoryOptionsViewModel::new(initial_options()));
    let output = Arc::new(BufferedOutputSurface::new());
    let builder = RequestOptionsBuilder::new(
        view_model.clone(),
        output.clone(),
        Arc::new(InlineContext),
    );
    Fixture {
        view_model,
        output,
        builder,
    }
}

fn select(platform: &str, version: &str) -> OptionsEdit {
    OptionsEdit::SelectVersion {
        platform: platform.to_string(),
        version: format!("{}, Version={}", platform, version),
        selected: true,
    }
}

#[tokio::test]
async fn test_build_sees_edits_made_before_refresh() {
    let f = fixture();
    f.view_model.edit(select(".NET Standard", "2.0"));
    f.view_model.edit(select(".NET Core", "3.1"));

    let request = f.builder.build(inputs()).await.unwrap();

    // platform display order wins over edit order
    assert_eq!(
        request.target_platforms(),
        [".NET Core, Version=3.1", ".NET Standard, Version=2.0"]
    );
    assert!(f.output.lines().is_empty());
    assert_eq!(f.view_model.update_count(), 1);
}

#[tokio::test]
async fn test_build_without_selection_uses_defaults() {
    let f = fixture();

    let request = f.builder.build(inputs()).await.unwrap();

    assert!(request.target_platforms().is_empty());
    assert_eq!(
        f.output.lines(),
        vec![
            Advisory::UsingDefaultTargets.to_string(),
            Advisory::TargetSelectionGuidance.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_selected_invalid_platform_warns_once() {
    let f = fixture();
    f.view_model.edit(select("Silverlight", "5.0"));
    f.view_model.edit(select(".NET Core", "2.0"));

    f.builder.build(inputs()).await.unwrap();

    let lines = f.output.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Silverlight"));
}

#[tokio::test]
async fn test_save_metadata_controls_telemetry_flag() {
    let f = fixture();
    let request = f.builder.build(inputs()).await.unwrap();
    assert!(!request.request_flags().contains(RequestFlags::NO_TELEMETRY));

    f.view_model.edit(OptionsEdit::SetSaveMetadata(false));
    let request = f.builder.build(inputs()).await.unwrap();
    assert!(request.request_flags().contains(RequestFlags::NO_TELEMETRY));
    assert!(request
        .request_flags()
        .contains(RequestFlags::SHOW_NON_PORTABLE_APIS));
}

#[tokio::test]
async fn test_double_refresh_matches_single_refresh() {
    let f = fixture();
    f.view_model.edit(select(".NET Core", "2.0"));

    f.view_model.update().await.unwrap();
    let once = f.view_model.snapshot();

    // the builder refreshes again; nothing new was edited in between
    let request = f.builder.build(inputs()).await.unwrap();
    assert_eq!(f.view_model.snapshot(), once);
    assert_eq!(request.target_platforms(), once.selected_targets().as_slice());
}

#[tokio::test]
async fn test_each_build_produces_fresh_request() {
    let f = fixture();
    let first = f.builder.build(inputs()).await.unwrap();

    f.view_model.edit(select(".NET Core", "2.0"));
    let second = f.builder.build(inputs()).await.unwrap();

    assert!(first.target_platforms().is_empty());
    assert_eq!(second.target_platforms(), [".NET Core, Version=2.0"]);
    assert_eq!(second.input_assemblies().len(), 2);
}
