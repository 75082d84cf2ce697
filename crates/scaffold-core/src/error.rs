//! Error types for scaffold.
//!
//! Every failure a generation request can hit is one variant of [`Error`].
//! The `Display` text of each variant starts with its category so the CLI can
//! print it verbatim on the diagnostic stream.
//!
//! Following Microsoft Rust Guidelines, errors expose `is_xxx()` methods
//! instead of `ErrorKind` enums.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{Error, IdentifierKind, ResourceName};
//!
//! let err = ResourceName::new("{evil}").unwrap_err();
//! assert!(err.is_validation_error());
//! assert!(err.is_injection_attempt());
//! assert!(err.to_string().starts_with("Validation error"));
//! ```

use crate::identifier::IdentifierKind;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for scaffold.
///
/// Shared by all crates in the workspace so the CLI sees a single hierarchy.
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier is empty or malformed for its class.
    #[error("Validation error: {reason}")]
    ValidationError {
        /// Identifier class that was being validated
        kind: IdentifierKind,
        /// The rejected value
        value: String,
        /// Human-readable reason
        reason: String,
    },

    /// Identifier contains `{` or `}`.
    ///
    /// Kept apart from [`Error::ValidationError`] so callers can recognise
    /// template-injection attempts specifically.
    #[error(
        "Validation error: Invalid {kind} name: {value}. Curly braces are not allowed (template injection risk)."
    )]
    TemplateInjection {
        /// Identifier class that was being validated
        kind: IdentifierKind,
        /// The rejected value
        value: String,
    },

    /// Template name resolved outside the trusted template root.
    #[error(
        "Path confinement violation: invalid template path {name}. Template must be within {}",
        .root.display()
    )]
    PathConfinement {
        /// Requested template name
        name: String,
        /// Trusted template root
        root: PathBuf,
    },

    /// Template name is confined but no file exists there.
    #[error("Template not found: {}", .path.display())]
    TemplateNotFound {
        /// Requested template name
        name: String,
        /// Resolved location that was checked
        path: PathBuf,
    },

    /// Template text is defective (non-flat expression, unknown placeholder).
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the defect
        message: String,
        /// Underlying renderer error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Destination exists and overwriting was not requested.
    #[error("File already exists: {}. Use --force to overwrite.", .path.display())]
    DestinationExists {
        /// The blocking path
        path: PathBuf,
    },

    /// Destination path would land outside the output directory.
    #[error(
        "Path confinement violation: destination {} is outside output directory {}",
        .path.display(),
        .output_dir.display()
    )]
    DestinationOutsideOutput {
        /// Offending destination
        path: PathBuf,
        /// Output directory the destination must stay in
        output_dir: PathBuf,
    },

    /// Filesystem refused access.
    #[error("Permission denied: {}: {source}", .path.display())]
    PermissionDenied {
        /// Path that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure.
    #[error("I/O error for {}: {source}", .path.display())]
    IoError {
        /// Path that caused the error
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Wraps an I/O error, classifying permission failures separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::Error;
    /// use std::io;
    ///
    /// let err = Error::from_io("/root/x", io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.is_permission_denied());
    ///
    /// let err = Error::from_io("/tmp/x", io::Error::from(io::ErrorKind::Other));
    /// assert!(err.is_io_error());
    /// ```
    #[must_use]
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::IoError { path, source }
        }
    }

    /// Returns `true` if the identifier failed validation (including injection).
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError { .. } | Self::TemplateInjection { .. }
        )
    }

    /// Returns `true` if the identifier was rejected for containing braces.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::ModuleName;
    ///
    /// assert!(ModuleName::new("a{b}").unwrap_err().is_injection_attempt());
    /// assert!(!ModuleName::new("1abc").unwrap_err().is_injection_attempt());
    /// ```
    #[must_use]
    pub const fn is_injection_attempt(&self) -> bool {
        matches!(self, Self::TemplateInjection { .. })
    }

    /// Returns `true` if a template or destination path escaped its root.
    #[must_use]
    pub const fn is_confinement_error(&self) -> bool {
        matches!(
            self,
            Self::PathConfinement { .. } | Self::DestinationOutsideOutput { .. }
        )
    }

    /// Returns `true` if the requested template does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }

    /// Returns `true` if the template text itself is defective.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if a destination exists and `--force` was not given.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::Error;
    ///
    /// let err = Error::DestinationExists { path: "users_router.py".into() };
    /// assert!(err.is_destination_exists());
    /// assert!(err.to_string().contains("--force"));
    /// ```
    #[must_use]
    pub const fn is_destination_exists(&self) -> bool {
        matches!(self, Self::DestinationExists { .. })
    }

    /// Returns `true` if the filesystem denied access.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Returns `true` for other filesystem errors.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. } | Self::InvalidArgument(_))
    }
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, Error>;
