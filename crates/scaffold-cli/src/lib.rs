//! Scaffold CLI library.
//!
//! Exposes the argument definitions, command implementations and formatters
//! so they can be tested without spawning the binary.

#![allow(clippy::unnecessary_wraps)] // commands share the `Result<ExitCode>` signature

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands};
