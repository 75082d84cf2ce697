//! Security tests for template loading.
//!
//! Ensures that:
//! - Absolute paths and `..` traversal never leave the template root
//! - Symlinks pointing outside the root are refused
//! - Confinement failures are never reported as missing templates

mod path_traversal;
