//! Observation channel for preview (dry-run) mode.

use scaffold_core::{Error, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Receives the files a preview would have written.
pub trait PreviewSink {
    /// Reports one would-be destination and its full rendered content.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink itself cannot be written to.
    fn emit(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Prints previews to stdout as `[dry-run] Would create <path>` followed by
/// the content.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPreview;

impl PreviewSink for StdoutPreview {
    fn emit(&mut self, path: &Path, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "[dry-run] Would create {}", path.display())
            .and_then(|()| writeln!(stdout, "{content}"))
            .map_err(|e| Error::from_io("<stdout>", e))
    }
}

/// One previewed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    /// Destination that would have been written
    pub path: PathBuf,
    /// Rendered content
    pub content: String,
}

/// Keeps previews in memory.
///
/// # Examples
///
/// ```
/// use scaffold_files::{CollectingPreview, PreviewSink};
/// use std::path::Path;
///
/// let mut sink = CollectingPreview::default();
/// sink.emit(Path::new("a.py"), "print()").unwrap();
/// assert_eq!(sink.entries()[0].content, "print()");
/// ```
#[derive(Debug, Default, Clone)]
pub struct CollectingPreview {
    entries: Vec<PreviewEntry>,
}

impl CollectingPreview {
    /// Returns everything emitted so far, in order.
    #[must_use]
    pub fn entries(&self) -> &[PreviewEntry] {
        &self.entries
    }

    /// Consumes the sink, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PreviewEntry> {
        self.entries
    }
}

impl PreviewSink for CollectingPreview {
    fn emit(&mut self, path: &Path, content: &str) -> Result<()> {
        self.entries.push(PreviewEntry {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        Ok(())
    }
}
