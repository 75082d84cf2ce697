//! Destination handling for generated files.
//!
//! Generated artifacts arrive here as [`PlannedFile`]s (a path relative to
//! the output directory plus rendered content). For each one, in order:
//!
//! 1. the destination is confined to the output directory
//! 2. an [`OverwriteDecision`] is taken from the preview flag, the force flag
//!    and whether the destination exists
//! 3. the file is written, reported to a [`PreviewSink`], or the request is
//!    aborted with [`scaffold_core::Error::DestinationExists`]
//!
//! Writes are sequential and not transactional: a failure leaves earlier
//! files of the same artifact in place.
//!
//! # Examples
//!
//! ```
//! use scaffold_files::{ArtifactWriter, CollectingPreview, PlannedFile, WriteOptions};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut preview = CollectingPreview::default();
//! let files = vec![PlannedFile::new("users_router.py", "router = ...")];
//!
//! let outcomes = ArtifactWriter::new(dir.path(), WriteOptions::new().with_preview(true))
//!     .write_all(&files, &mut preview)
//!     .unwrap();
//!
//! assert_eq!(outcomes.len(), 1);
//! assert_eq!(preview.entries().len(), 1);
//! assert!(!dir.path().join("users_router.py").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod policy;
mod preview;
mod writer;

pub use policy::{OverwriteDecision, WriteOptions, confine_destination};
pub use preview::{CollectingPreview, PreviewEntry, PreviewSink, StdoutPreview};
pub use writer::{ArtifactWriter, FileOutcome, FileStatus, PlannedFile};
