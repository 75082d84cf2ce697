//! Core types, name transformations and errors for scaffold.
//!
//! This crate provides the pieces every generator shares:
//! - Error hierarchy with `is_xxx()` classifiers
//! - Validated identifier newtypes (`ResourceName`, `ComponentName`,
//!   `ModuleName`, `FunctionName`) that reject template syntax
//! - Name transformations (`to_pascal_case`, `to_singular`)
//! - CLI exit code and output format types
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{ResourceName, naming};
//!
//! let resource = ResourceName::new("posts")?;
//! assert_eq!(naming::to_singular(resource.as_str()), "post");
//! assert_eq!(naming::to_pascal_case("post"), "Post");
//! # Ok::<(), scaffold_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod identifier;

pub mod cli;
pub mod naming;

pub use error::{Error, Result};
pub use identifier::{
    ComponentName, FunctionName, IdentifierKind, ModuleName, ResourceName, validate_function_names,
    validate_identifier, validate_no_template_syntax,
};
