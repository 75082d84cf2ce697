//! Command implementations.

pub mod completions;
pub mod config;
pub mod generate;
