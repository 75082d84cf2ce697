//! Security tests for identifier validation.
//!
//! Ensures that:
//! - Brace-delimited template syntax never passes validation
//! - Injection attempts are reported distinctly from format errors
//! - Derived names cannot reintroduce braces

mod template_injection;
