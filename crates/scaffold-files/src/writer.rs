//! Sequential writer for planned artifact files.

use crate::policy::{OverwriteDecision, WriteOptions, confine_destination};
use crate::preview::PreviewSink;
use scaffold_core::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the output directory
    pub relative_path: PathBuf,
    /// Rendered content, written verbatim
    pub content: String,
}

impl PlannedFile {
    /// Creates a planned file.
    #[must_use]
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// How a planned file was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Written to disk
    Written,
    /// Reported to the preview sink only
    Previewed,
}

/// Result for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Full destination path
    pub path: PathBuf,
    /// What happened to it
    pub status: FileStatus,
}

/// Writes planned files under an output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    options: WriteOptions,
}

impl ArtifactWriter {
    /// Creates a writer for `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, options: WriteOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// Returns the write options.
    #[must_use]
    pub const fn options(&self) -> WriteOptions {
        self.options
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Handles `files` in order, stopping at the first failure.
    ///
    /// Files handled before a failure stay on disk.
    ///
    /// # Errors
    ///
    /// - [`Error::DestinationOutsideOutput`] if a path leaves the output directory
    /// - [`Error::DestinationExists`] if a destination exists without force
    /// - [`Error::PermissionDenied`] / [`Error::IoError`] on filesystem failures
    pub fn write_all(
        &self,
        files: &[PlannedFile],
        preview: &mut dyn PreviewSink,
    ) -> Result<Vec<FileOutcome>> {
        files
            .iter()
            .map(|file| self.write_one(file, preview))
            .collect()
    }

    fn write_one(&self, file: &PlannedFile, preview: &mut dyn PreviewSink) -> Result<FileOutcome> {
        let path = confine_destination(&self.output_dir, &file.relative_path)?;
        let decision = OverwriteDecision::decide(path.exists(), self.options);
        debug!(path = %path.display(), ?decision, "destination checked");

        let status = match decision {
            OverwriteDecision::Blocked => return Err(Error::DestinationExists { path }),
            OverwriteDecision::Preview => {
                preview.emit(&path, &file.content)?;
                FileStatus::Previewed
            }
            OverwriteDecision::Write => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| Error::from_io(parent, e))?;
                }
                fs::write(&path, &file.content).map_err(|e| Error::from_io(&path, e))?;
                info!(path = %path.display(), "created file");
                FileStatus::Written
            }
        };

        Ok(FileOutcome { path, status })
    }
}
