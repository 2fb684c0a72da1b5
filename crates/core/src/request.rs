//! Analysis Request & Outcome Types
//!
//! `AnalysisRequest` is the immutable value handed to the external analysis
//! engine. It is produced by `AnalysisRequestBuilder` and exposes read-only
//! accessors only; each session builds a fresh one.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// RequestFlags
// ============================================================================

/// Bitset of request options understood by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestFlags(u32);

impl RequestFlags {
    pub const NONE: Self = Self(0);
    /// Report APIs that are not portable to the selected targets.
    pub const SHOW_NON_PORTABLE_APIS: Self = Self(1 << 0);
    /// Ask the engine not to keep result metadata.
    pub const NO_TELEMETRY: Self = Self(1 << 1);

    /// Raw bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for RequestFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RequestFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for RequestFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::SHOW_NON_PORTABLE_APIS) {
            names.push("ShowNonPortableApis");
        }
        if self.contains(Self::NO_TELEMETRY) {
            names.push("NoTelemetry");
        }
        if names.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

// ============================================================================
// InputAssembly
// ============================================================================

/// One input artifact of the analysis.
///
/// `secondary_flag` is always constructed as `false` and is never read by the
/// session core. Its meaning belongs to the engine contract and is kept as an
/// explicit, uninterpreted attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAssembly {
    pub path: PathBuf,
    pub secondary_flag: bool,
}

impl InputAssembly {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            secondary_flag: false,
        }
    }
}

// ============================================================================
// AnalysisRequest
// ============================================================================

/// Immutable description of one analysis: what to analyze, against which
/// targets, in which output formats, with which flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub(crate) entrypoint: String,
    pub(crate) input_assemblies: Vec<InputAssembly>,
    pub(crate) target_platforms: Vec<String>,
    pub(crate) output_formats: Vec<String>,
    pub(crate) output_file_name: PathBuf,
    pub(crate) request_flags: RequestFlags,
    pub(crate) referenced_packages: Vec<String>,
    pub(crate) ignored_assembly_files: Vec<String>,
    pub(crate) breaking_change_suppressions: Vec<String>,
    pub(crate) invalid_input_files: Vec<String>,
}

impl AnalysisRequest {
    /// Identifier of the root artifact to analyze.
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    pub fn input_assemblies(&self) -> &[InputAssembly] {
        &self.input_assemblies
    }

    /// Selected target identifiers in display order. Empty means the engine
    /// applies its own defaults.
    pub fn target_platforms(&self) -> &[String] {
        &self.target_platforms
    }

    pub fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    /// Destination base path for generated reports (directory + file name,
    /// without extension).
    pub fn output_file_name(&self) -> &Path {
        &self.output_file_name
    }

    pub fn request_flags(&self) -> RequestFlags {
        self.request_flags
    }

    pub fn referenced_packages(&self) -> &[String] {
        &self.referenced_packages
    }

    pub fn ignored_assembly_files(&self) -> &[String] {
        &self.ignored_assembly_files
    }

    pub fn breaking_change_suppressions(&self) -> &[String] {
        &self.breaking_change_suppressions
    }

    pub fn invalid_input_files(&self) -> &[String] {
        &self.invalid_input_files
    }
}

// ============================================================================
// AnalysisOutcome
// ============================================================================

/// What the analysis engine hands back for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    /// Written report artifacts. Empty means no report could be produced.
    pub paths: Vec<PathBuf>,
    /// Opaque structured analysis result, returned to the session caller.
    #[serde(default)]
    pub result: Value,
}

impl AnalysisOutcome {
    pub fn new(paths: Vec<PathBuf>, result: Value) -> Self {
        Self { paths, result }
    }

    /// Whether the engine failed to produce any report.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
