//! Security test suite entry point for scaffold-codegen.

mod security;
