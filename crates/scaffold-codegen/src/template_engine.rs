//! Flat placeholder rendering on top of Handlebars.
//!
//! Templates may only contain `{{key}}` placeholders. Blocks, helpers,
//! partials, paths and triple-stash expressions are rejected before Handlebars
//! sees the text, so rendering is a plain key lookup with no nested
//! evaluation. Strict mode turns an unknown key into an error, and escaping is
//! disabled so values are inserted verbatim.
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new();
//! let out = engine
//!     .render("router", "prefix=\"/{{resource}}\"", &json!({"resource": "posts"}))
//!     .unwrap();
//! assert_eq!(out, "prefix=\"/posts\"");
//!
//! let err = engine
//!     .render("bad", "{{#each items}}x{{/each}}", &json!({}))
//!     .unwrap_err();
//! assert!(err.is_template_error());
//! ```

use handlebars::Handlebars;
use regex::Regex;
use scaffold_core::{Error, Result};
use serde::Serialize;
use std::sync::LazyLock;

/// Matches every `{{ ... }}` expression, including malformed ones.
static EXPRESSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("valid regex"));

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid regex"));

/// Renders flat templates.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates an engine with strict mode on and HTML escaping off.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Substitutes `context` into `template`.
    ///
    /// `name` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template contains a non-flat
    /// expression or references a key missing from `context`.
    pub fn render<T: Serialize>(&self, name: &str, template: &str, context: &T) -> Result<String> {
        validate_flat(name, template)?;

        self.handlebars
            .render_template(template, context)
            .map_err(|e| Error::TemplateError {
                message: format!("failed to render template {name}: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the placeholder keys used by `template`, in order of appearance.
///
/// # Errors
///
/// Returns [`Error::TemplateError`] on the first non-flat expression.
///
/// # Examples
///
/// ```
/// use scaffold_codegen::placeholders;
///
/// let keys = placeholders("t", "{{name}} and {{ name_lower }}").unwrap();
/// assert_eq!(keys, vec!["name", "name_lower"]);
/// ```
pub fn placeholders(name: &str, template: &str) -> Result<Vec<String>> {
    EXPRESSION_REGEX
        .captures_iter(template)
        .map(|caps| {
            let inner = caps[1].trim();
            if PLACEHOLDER_REGEX.is_match(inner) {
                Ok(inner.to_string())
            } else {
                Err(Error::TemplateError {
                    message: format!(
                        "template {name} contains unsupported expression '{{{{{}}}}}'; only flat placeholders are allowed",
                        &caps[1]
                    ),
                    source: None,
                })
            }
        })
        .collect()
}

fn validate_flat(name: &str, template: &str) -> Result<()> {
    placeholders(name, template).map(|_| ())
}
