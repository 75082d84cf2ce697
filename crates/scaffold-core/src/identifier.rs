//! Validated identifiers (strong types over primitives).
//!
//! Every user-supplied name passes through [`validate_identifier`] before it
//! reaches a name transformation or a template. Checks run in a fixed order
//! and stop at the first failure:
//!
//! 1. non-empty
//! 2. no `{` or `}` ([`validate_no_template_syntax`])
//! 3. structural rules for the identifier class
//!
//! The brace check is the only defence against template injection, since
//! rendering substitutes values without escaping.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{ComponentName, ModuleName, ResourceName};
//!
//! assert!(ResourceName::new("user-profiles").is_ok());
//! assert!(ComponentName::new("UserProfile").is_ok());
//! assert!(ModuleName::new("user_service").is_ok());
//!
//! assert!(ResourceName::new("user profiles").is_err());
//! assert!(ComponentName::new("userProfile").is_err());
//! assert!(ModuleName::new("1service").is_err());
//! ```

use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static STRICT_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid regex"));

/// Class of identifier being validated.
///
/// Each class carries its own structural rule; the emptiness and injection
/// checks are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// API resource: alphanumeric plus `-` and `_`.
    Resource,
    /// UI component: leading uppercase letter, alphanumeric plus `_`.
    Component,
    /// Module under test: `[a-zA-Z_][a-zA-Z0-9_]*`.
    Module,
    /// Function under test: `[a-zA-Z_][a-zA-Z0-9_]*`.
    Function,
}

impl IdentifierKind {
    /// Returns the lowercase label used in messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::IdentifierKind;
    ///
    /// assert_eq!(IdentifierKind::Resource.as_str(), "resource");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Component => "component",
            Self::Module => "module",
            Self::Function => "function",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Resource => "Resource",
            Self::Component => "Component",
            Self::Module => "Module",
            Self::Function => "Function",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates that a value contains no template delimiters.
///
/// # Errors
///
/// Returns [`Error::TemplateInjection`] if `value` contains `{` or `}`.
///
/// # Examples
///
/// ```
/// use scaffold_core::{IdentifierKind, validate_no_template_syntax};
///
/// assert!(validate_no_template_syntax("users", IdentifierKind::Resource).is_ok());
/// assert!(validate_no_template_syntax("user{evil}", IdentifierKind::Resource).is_err());
/// ```
pub fn validate_no_template_syntax(value: &str, kind: IdentifierKind) -> Result<()> {
    if value.contains(['{', '}']) {
        return Err(Error::TemplateInjection {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validates `value` as an identifier of the given class.
///
/// # Errors
///
/// - [`Error::ValidationError`] if the value is empty or malformed
/// - [`Error::TemplateInjection`] if the value contains braces
///
/// # Examples
///
/// ```
/// use scaffold_core::{IdentifierKind, validate_identifier};
///
/// assert!(validate_identifier(IdentifierKind::Function, "create_user").is_ok());
/// let err = validate_identifier(IdentifierKind::Function, "").unwrap_err();
/// assert!(err.to_string().contains("cannot be empty"));
/// ```
pub fn validate_identifier(kind: IdentifierKind, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::ValidationError {
            kind,
            value: String::new(),
            reason: format!("{} name cannot be empty", kind.label()),
        });
    }

    validate_no_template_syntax(value, kind)?;

    match kind {
        IdentifierKind::Resource => check_resource(value),
        IdentifierKind::Component => check_component(value),
        IdentifierKind::Module | IdentifierKind::Function => check_strict(kind, value),
    }
}

fn invalid(kind: IdentifierKind, value: &str, reason: String) -> Error {
    Error::ValidationError {
        kind,
        value: value.to_string(),
        reason,
    }
}

fn is_alphanumeric_after_removing(value: &str, separators: &[char]) -> bool {
    let mut remaining = value.chars().filter(|c| !separators.contains(c)).peekable();
    remaining.peek().is_some() && remaining.all(|c| c.is_ascii_alphanumeric())
}

fn check_resource(value: &str) -> Result<()> {
    if !is_alphanumeric_after_removing(value, &['-', '_']) {
        return Err(invalid(
            IdentifierKind::Resource,
            value,
            format!(
                "Invalid resource name: {value}. Use only alphanumeric, hyphens, or underscores."
            ),
        ));
    }
    Ok(())
}

fn check_component(value: &str) -> Result<()> {
    if !value.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(invalid(
            IdentifierKind::Component,
            value,
            format!("Component name must be PascalCase: '{value}' should start with uppercase"),
        ));
    }

    if !is_alphanumeric_after_removing(value, &['_']) {
        return Err(invalid(
            IdentifierKind::Component,
            value,
            format!("Invalid component name: {value}. Use only alphanumeric characters."),
        ));
    }
    Ok(())
}

fn check_strict(kind: IdentifierKind, value: &str) -> Result<()> {
    if !STRICT_IDENTIFIER_REGEX.is_match(value) {
        return Err(invalid(
            kind,
            value,
            format!("Invalid {kind} name: {value}. Use valid identifier format."),
        ));
    }
    Ok(())
}

macro_rules! validated_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            /// Validates `value` and wraps it.
            ///
            /// # Errors
            ///
            /// Returns [`Error::ValidationError`] or [`Error::TemplateInjection`]
            /// as described in [`validate_identifier`].
            pub fn new(value: impl AsRef<str>) -> Result<Self> {
                let value = value.as_ref();
                validate_identifier($kind, value)?;
                Ok(Self(value.to_string()))
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier and returns the inner `String`.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

validated_identifier!(
    /// Validated API resource name (e.g. `users`, `user-profiles`).
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::ResourceName;
    ///
    /// let name = ResourceName::new("api_keys")?;
    /// assert_eq!(name.as_str(), "api_keys");
    /// assert!(ResourceName::new("user.profile").is_err());
    /// # Ok::<(), scaffold_core::Error>(())
    /// ```
    ResourceName => IdentifierKind::Resource
);

validated_identifier!(
    /// Validated UI component name (e.g. `UserProfile`).
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::ComponentName;
    ///
    /// assert!(ComponentName::new("Nav_Bar").is_ok());
    /// assert!(ComponentName::new("navBar").is_err());
    /// ```
    ComponentName => IdentifierKind::Component
);

validated_identifier!(
    /// Validated module name for test generation (e.g. `user_service`).
    ModuleName => IdentifierKind::Module
);

validated_identifier!(
    /// Validated function name for test generation (e.g. `create_user`).
    FunctionName => IdentifierKind::Function
);

/// Validates a non-empty list of function names.
///
/// Every entry is checked; the first failure aborts the whole list.
///
/// # Errors
///
/// Returns [`Error::ValidationError`] if the list is empty or any entry is
/// malformed, and [`Error::TemplateInjection`] if any entry contains braces.
///
/// # Examples
///
/// ```
/// use scaffold_core::validate_function_names;
///
/// let names = validate_function_names(&["create_user", "get_user"])?;
/// assert_eq!(names.len(), 2);
/// assert!(validate_function_names::<&str>(&[]).is_err());
/// # Ok::<(), scaffold_core::Error>(())
/// ```
pub fn validate_function_names<S: AsRef<str>>(functions: &[S]) -> Result<Vec<FunctionName>> {
    if functions.is_empty() {
        return Err(Error::ValidationError {
            kind: IdentifierKind::Function,
            value: String::new(),
            reason: "At least one function name is required".to_string(),
        });
    }

    functions.iter().map(FunctionName::new).collect()
}
