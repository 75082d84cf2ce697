//! Boilerplate generation for API routers, UI components and test suites.
//!
//! Every request goes through the same pipeline:
//!
//! 1. validate the primary identifier and any secondary identifiers
//! 2. derive case and singular variants
//! 3. load every template the artifact needs
//! 4. substitute placeholders
//! 5. hand the rendered files to [`scaffold_files::ArtifactWriter`], which
//!    applies the overwrite policy and writes or previews each one
//!
//! Steps 1-4 fail before anything reaches the output directory.
//!
//! # Examples
//!
//! ```
//! use scaffold_files::{ArtifactWriter, StdoutPreview, WriteOptions};
//! use scaffold_generator::{Generator, TestFramework, TestRequest};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let generator = Generator::bundled()?;
//! let writer = ArtifactWriter::new(dir.path(), WriteOptions::new());
//!
//! let request = TestRequest::new("auth_utils", ["validate_token"], TestFramework::Pytest);
//! let report = generator.generate(&request.into(), &writer, &mut StdoutPreview)?;
//!
//! assert_eq!(report.written().count(), 1);
//! assert!(dir.path().join("test_auth_utils.py").exists());
//! # Ok::<(), scaffold_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod framework;
mod pipeline;
mod report;
mod request;

pub use framework::{ApiFramework, ComponentFramework, TestFramework};
pub use pipeline::{Generator, Plan};
pub use report::{ArtifactKind, GenerationReport};
pub use request::{ApiRequest, ComponentRequest, GenerationRequest, TestRequest};
