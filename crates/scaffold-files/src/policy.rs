//! Overwrite policy and destination confinement.

use scaffold_core::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Options controlling how planned files reach the filesystem.
///
/// # Examples
///
/// ```
/// use scaffold_files::WriteOptions;
///
/// let options = WriteOptions::new().with_force(true);
/// assert!(options.force);
/// assert!(!options.preview);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite existing destinations
    pub force: bool,
    /// Report instead of writing
    pub preview: bool,
}

impl WriteOptions {
    /// Creates options with both flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            force: false,
            preview: false,
        }
    }

    /// Sets whether existing destinations may be overwritten.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Sets whether to preview instead of writing.
    #[must_use]
    pub const fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }
}

/// What happens to one destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteDecision {
    /// Write the file (new, or existing with force).
    Write,
    /// Preview mode: report the file, touch nothing.
    Preview,
    /// Destination exists and force is off.
    Blocked,
}

impl OverwriteDecision {
    /// Decides the fate of a destination.
    ///
    /// Preview wins over everything, so a preview never fails on an existing
    /// file.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_files::{OverwriteDecision, WriteOptions};
    ///
    /// let plain = WriteOptions::new();
    /// assert_eq!(OverwriteDecision::decide(false, plain), OverwriteDecision::Write);
    /// assert_eq!(OverwriteDecision::decide(true, plain), OverwriteDecision::Blocked);
    /// assert_eq!(
    ///     OverwriteDecision::decide(true, plain.with_force(true)),
    ///     OverwriteDecision::Write
    /// );
    /// assert_eq!(
    ///     OverwriteDecision::decide(true, plain.with_preview(true)),
    ///     OverwriteDecision::Preview
    /// );
    /// ```
    #[must_use]
    pub const fn decide(exists: bool, options: WriteOptions) -> Self {
        if options.preview {
            Self::Preview
        } else if exists && !options.force {
            Self::Blocked
        } else {
            Self::Write
        }
    }
}

/// Joins `relative` onto `output_dir`, refusing anything that would leave it.
///
/// The check is lexical because the output directory may not exist yet.
///
/// # Errors
///
/// Returns [`Error::DestinationOutsideOutput`] for absolute paths or `..`
/// segments that climb above `output_dir`, and for empty paths.
///
/// # Examples
///
/// ```
/// use scaffold_files::confine_destination;
/// use std::path::Path;
///
/// let out = Path::new("src/components");
/// assert_eq!(
///     confine_destination(out, Path::new("NavBar/NavBar.tsx")).unwrap(),
///     Path::new("src/components/NavBar/NavBar.tsx")
/// );
/// assert!(confine_destination(out, Path::new("../x.tsx")).is_err());
/// assert!(confine_destination(out, Path::new("/etc/x")).is_err());
/// ```
pub fn confine_destination(output_dir: &Path, relative: &Path) -> Result<PathBuf> {
    let outside = || Error::DestinationOutsideOutput {
        path: relative.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
    };

    let mut normalized = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => normalized.push(segment),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(outside());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(outside()),
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(outside());
    }

    Ok(output_dir.join(normalized))
}
