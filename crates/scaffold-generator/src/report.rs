//! Summary of one generation run.

use scaffold_files::{FileOutcome, FileStatus};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of artifact that was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// API router
    Api,
    /// UI component
    Component,
    /// Test suite
    Test,
}

impl ArtifactKind {
    /// Returns the artifact name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Component => "component",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a generation run did.
///
/// Serialized as-is for `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Artifact kind
    pub artifact: ArtifactKind,
    /// Framework name
    pub framework: &'static str,
    /// Primary identifier as validated
    pub identifier: String,
    /// Output directory
    pub output_dir: PathBuf,
    /// Whether this was a preview run
    pub preview: bool,
    /// One entry per destination, in generation order
    pub files: Vec<FileOutcome>,
}

impl GenerationReport {
    /// Paths that were written to disk.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.paths_with(FileStatus::Written)
    }

    /// Paths that were only previewed.
    pub fn previewed(&self) -> impl Iterator<Item = &Path> {
        self.paths_with(FileStatus::Previewed)
    }

    fn paths_with(&self, status: FileStatus) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(move |file| file.status == status)
            .map(|file| file.path.as_path())
    }
}
