//! Analysis Request Builder
//!
//! Follows the standard Rust builder pattern:
//! 1. Create with `AnalysisRequestBuilder::new(entrypoint)`
//! 2. Chain `.field(value)` calls
//! 3. Call `.build()` to obtain the immutable `AnalysisRequest`
//!
//! Building never fails. Malformed paths or unknown formats are left for the
//! analysis engine to reject, so the builder performs no validation.

use std::path::PathBuf;

use crate::request::{AnalysisRequest, InputAssembly, RequestFlags};

/// Builder for `AnalysisRequest`.
///
/// # Example
/// ```ignore
/// let request = AnalysisRequestBuilder::new("app.dll")
///     .input_assemblies(["bin/app.dll"])
///     .output_formats(["HTML"])
///     .request_flags(RequestFlags::SHOW_NON_PORTABLE_APIS)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    entrypoint: String,
    input_assemblies: Vec<InputAssembly>,
    target_platforms: Vec<String>,
    output_formats: Vec<String>,
    output_file_name: PathBuf,
    request_flags: RequestFlags,
    referenced_packages: Vec<String>,
    ignored_assembly_files: Vec<String>,
    breaking_change_suppressions: Vec<String>,
    invalid_input_files: Vec<String>,
}

impl AnalysisRequestBuilder {
    pub fn new(entrypoint: impl Into<String>) -> Self {
        Self {
            entrypoint: entrypoint.into(),
            ..Self::default()
        }
    }

    /// Set the input artifact paths. Each is paired with a `false`
    /// secondary flag.
    pub fn input_assemblies<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.input_assemblies = paths.into_iter().map(InputAssembly::new).collect();
        self
    }

    pub fn target_platforms(mut self, targets: Vec<String>) -> Self {
        self.target_platforms = targets;
        self
    }

    pub fn output_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn output_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file_name = path.into();
        self
    }

    pub fn request_flags(mut self, flags: RequestFlags) -> Self {
        self.request_flags = flags;
        self
    }

    pub fn referenced_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.referenced_packages = packages.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignored_assembly_files(mut self, files: Vec<String>) -> Self {
        self.ignored_assembly_files = files;
        self
    }

    pub fn breaking_change_suppressions(mut self, suppressions: Vec<String>) -> Self {
        self.breaking_change_suppressions = suppressions;
        self
    }

    pub fn invalid_input_files(mut self, files: Vec<String>) -> Self {
        self.invalid_input_files = files;
        self
    }

    /// Freeze the collected values into an `AnalysisRequest`.
    pub fn build(self) -> AnalysisRequest {
        AnalysisRequest {
            entrypoint: self.entrypoint,
            input_assemblies: self.input_assemblies,
            target_platforms: self.target_platforms,
            output_formats: self.output_formats,
            output_file_name: self.output_file_name,
            request_flags: self.request_flags,
            referenced_packages: self.referenced_packages,
            ignored_assembly_files: self.ignored_assembly_files,
            breaking_change_suppressions: self.breaking_change_suppressions,
            invalid_input_files: self.invalid_input_files,
        }
    }
}
