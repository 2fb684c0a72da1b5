//! Options Snapshot Types
//!
//! Plain-data copy of the options view model state. The request builder
//! works from a snapshot instead of the live view model, which keeps request
//! composition deterministic and testable without a UI.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One selectable version of a target platform.
///
/// `name` is the full target identifier sent to the engine, e.g.
/// `.NET Core, Version=2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformVersion {
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl PlatformVersion {
    pub fn new(name: impl Into<String>, is_selected: bool) -> Self {
        Self {
            name: name.into(),
            is_selected,
        }
    }

    /// Version named after its platform, `"{platform}, Version={version}"`.
    pub fn of_platform(platform: &str, version: &str, is_selected: bool) -> Self {
        Self::new(format!("{}, Version={}", platform, version), is_selected)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A target platform with its versions in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPlatform {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<PlatformVersion>,
}

impl TargetPlatform {
    pub fn new(name: impl Into<String>, versions: Vec<PlatformVersion>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }

    /// Whether any version of this platform is selected.
    pub fn has_selection(&self) -> bool {
        self.versions.iter().any(|v| v.is_selected)
    }

    /// Selected versions in display order.
    pub fn selected_versions(&self) -> impl Iterator<Item = &PlatformVersion> {
        self.versions.iter().filter(|v| v.is_selected)
    }
}

/// A report output format the user can pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectableFormat {
    pub display_name: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl SelectableFormat {
    pub fn new(display_name: impl Into<String>, is_selected: bool) -> Self {
        Self {
            display_name: display_name.into(),
            is_selected,
        }
    }
}

/// Snapshot of everything the session reads from the options view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsSnapshot {
    /// Valid target platforms, display order.
    #[serde(default)]
    pub targets: Vec<TargetPlatform>,
    /// Platforms the host marked as structurally invalid.
    #[serde(default)]
    pub invalid_targets: Vec<TargetPlatform>,
    #[serde(default)]
    pub formats: Vec<SelectableFormat>,
    pub output_directory: PathBuf,
    pub default_output_name: String,
    /// When false the request opts out of telemetry.
    #[serde(default = "default_save_metadata")]
    pub save_metadata: bool,
}

fn default_save_metadata() -> bool {
    true
}

impl Default for OptionsSnapshot {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            invalid_targets: Vec::new(),
            formats: vec![SelectableFormat::new("HTML", true)],
            output_directory: PathBuf::from("."),
            default_output_name: "ApiPortAnalysis".to_string(),
            save_metadata: true,
        }
    }
}

impl OptionsSnapshot {
    /// Display names of the selected output formats, in display order.
    pub fn selected_formats(&self) -> Vec<String> {
        self.formats
            .iter()
            .filter(|f| f.is_selected)
            .map(|f| f.display_name.clone())
            .collect()
    }

    /// Selected target identifiers: platforms in display order, and within
    /// each platform its selected versions in display order.
    pub fn selected_targets(&self) -> Vec<String> {
        self.targets
            .iter()
            .flat_map(|p| p.selected_versions())
            .map(|v| v.to_string())
            .collect()
    }

    /// Invalid platforms that nevertheless have a selected version.
    pub fn selected_invalid_targets(&self) -> impl Iterator<Item = &TargetPlatform> {
        self.invalid_targets.iter().filter(|p| p.has_selection())
    }

    /// `{output_directory}/{default_output_name}`
    pub fn report_path(&self) -> PathBuf {
        self.output_directory.join(&self.default_output_name)
    }
}
