//! Filesystem Report Writer
//!
//! Writes report bytes under the requested directory. Without `overwrite`,
//! an existing `name.ext` is left alone and `name (1).ext`, `name (2).ext`, ...
//! is used instead.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use portability_session_core::{CoreError, CoreResult, ReportWriter};
use tracing::debug;

/// Upper bound on `name (n).ext` probing.
const MAX_NAME_SUFFIX: u32 = 1000;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsReportWriter;

impl FsReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn file_name(file_name: &str, extension: &str, suffix: Option<u32>) -> String {
        let extension = extension.trim_start_matches('.');
        match suffix {
            None => format!("{}.{}", file_name, extension),
            Some(n) => format!("{} ({}).{}", file_name, n, extension),
        }
    }

    async fn free_path(directory: &Path, file_name: &str, extension: &str) -> CoreResult<PathBuf> {
        let candidate = directory.join(Self::file_name(file_name, extension, None));
        if !tokio::fs::try_exists(&candidate).await? {
            return Ok(candidate);
        }
        for n in 1..=MAX_NAME_SUFFIX {
            let candidate = directory.join(Self::file_name(file_name, extension, Some(n)));
            if !tokio::fs::try_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(CoreError::internal(format!(
            "No free report file name for '{}' in {}",
            file_name,
            directory.display()
        )))
    }
}

#[async_trait]
impl ReportWriter for FsReportWriter {
    async fn write_report(
        &self,
        contents: &[u8],
        extension: &str,
        directory: &Path,
        file_name: &str,
        overwrite: bool,
    ) -> CoreResult<PathBuf> {
        tokio::fs::create_dir_all(directory).await?;

        let path = if overwrite {
            directory.join(Self::file_name(file_name, extension, None))
        } else {
            Self::free_path(directory, file_name, extension).await?
        };

        tokio::fs::write(&path, contents).await?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote report");
        Ok(path)
    }
}
