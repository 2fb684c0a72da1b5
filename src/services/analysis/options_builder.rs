//! Request Options Builder
//!
//! Turns the current options view model state into an immutable
//! `AnalysisRequest`. Composition is split in two:
//!
//! - `plan_request` - pure function from an `OptionsSnapshot` to the request
//!   plus the advisory lines it triggers
//! - `RequestOptionsBuilder` - refreshes the view model, then writes the
//!   advisories on the coordination context

use std::path::PathBuf;
use std::sync::Arc;

use portability_session_core::{
    run_on, AnalysisRequest, AnalysisRequestBuilder, CoordinationContext, CoreResult,
    OptionsSnapshot, OptionsViewModel, OutputSurface, RequestFlags,
};
use tracing::{debug, warn};

use super::messages::Advisory;

/// Caller-supplied inputs of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestInputs {
    pub entrypoint: String,
    pub assembly_paths: Vec<PathBuf>,
    /// Display names of the requested output formats
    pub formats: Vec<String>,
    pub referenced_packages: Vec<String>,
    /// Destination base path for the reports
    pub report_path: PathBuf,
}

/// A composed request and the advisories to surface for it, in order.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub request: AnalysisRequest,
    pub advisories: Vec<Advisory>,
}

/// Flags for a request: non-portable APIs are always shown, telemetry is
/// disabled when the user does not want result metadata saved.
pub fn compose_flags(save_metadata: bool) -> RequestFlags {
    let mut flags = RequestFlags::SHOW_NON_PORTABLE_APIS;
    if !save_metadata {
        flags |= RequestFlags::NO_TELEMETRY;
    }
    flags
}

/// Compose the request for `inputs` against the options in `snapshot`.
pub fn plan_request(snapshot: &OptionsSnapshot, inputs: RequestInputs) -> RequestPlan {
    let mut advisories: Vec<Advisory> = snapshot
        .selected_invalid_targets()
        .map(|platform| Advisory::InvalidPlatformSelected {
            platform: platform.name.clone(),
        })
        .collect();

    let targets = snapshot.selected_targets();
    if targets.is_empty() {
        advisories.push(Advisory::UsingDefaultTargets);
        advisories.push(Advisory::TargetSelectionGuidance);
    }

    let request = AnalysisRequestBuilder::new(inputs.entrypoint)
        .input_assemblies(inputs.assembly_paths)
        .target_platforms(targets)
        .output_formats(inputs.formats)
        .output_file_name(inputs.report_path)
        .request_flags(compose_flags(snapshot.save_metadata))
        .referenced_packages(inputs.referenced_packages)
        .build();

    RequestPlan {
        request,
        advisories,
    }
}

/// Builds requests from the live options view model.
pub struct RequestOptionsBuilder {
    view_model: Arc<dyn OptionsViewModel>,
    output: Arc<dyn OutputSurface>,
    context: Arc<dyn CoordinationContext>,
}

impl RequestOptionsBuilder {
    pub fn new(
        view_model: Arc<dyn OptionsViewModel>,
        output: Arc<dyn OutputSurface>,
        context: Arc<dyn CoordinationContext>,
    ) -> Self {
        Self {
            view_model,
            output,
            context,
        }
    }

    /// Refresh the view model, compose the request, and write its advisories
    /// to the output surface.
    pub async fn build(&self, inputs: RequestInputs) -> CoreResult<AnalysisRequest> {
        self.view_model.update().await?;

        run_on(self.context.as_ref(), async {
            let snapshot = self.view_model.snapshot();
            let plan = plan_request(&snapshot, inputs);

            for advisory in &plan.advisories {
                if let Advisory::InvalidPlatformSelected { platform } = advisory {
                    warn!(platform = %platform, "invalid platform has selected versions");
                }
                self.output.write_line(&advisory.to_string());
            }

            debug!(
                entrypoint = plan.request.entrypoint(),
                targets = plan.request.target_platforms().len(),
                formats = plan.request.output_formats().len(),
                flags = %plan.request.request_flags(),
                "composed analysis request"
            );
            Ok(plan.request)
        })
        .await
    }
}
