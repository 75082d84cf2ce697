//! Output formatters for command reports.
//!
//! - `json`: pretty-printed JSON, stable for scripts
//! - `text`: one `key: value` line per leaf, dotted keys, no colors
//! - `pretty`: indented tree with colors
//!
//! Object keys come out in sorted order.

use anyhow::Result;
use colored::Colorize;
use scaffold_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use scaffold_cli::formatters::format_output;
/// use scaffold_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     artifact: String,
///     files: Vec<String>,
/// }
///
/// let summary = Summary {
///     artifact: "api".to_string(),
///     files: vec!["posts_router.py".to_string()],
/// };
///
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "artifact: api\nfiles.0: posts_router.py");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Value, scalar};

    /// Formats data as `key: value` lines.
    ///
    /// Nested keys are joined with `.`, array items use their index.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, "", &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, prefix: &str, lines: &mut Vec<String>) {
        let child = |key: &str| {
            if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            }
        };

        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    flatten(val, &child(key), lines);
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    flatten(item, &child(&i.to_string()), lines);
                }
            }
            _ => {
                let rendered = scalar(value).unwrap_or_default();
                if prefix.is_empty() {
                    lines.push(rendered);
                } else {
                    lines.push(format!("{prefix}: {rendered}"));
                }
            }
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value, scalar};

    /// Formats data as a colored, indented tree.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        render(&value, 0, &mut lines);
        Ok(lines.join("\n"))
    }

    fn paint(value: &Value) -> String {
        let plain = scalar(value).unwrap_or_default();
        match value {
            Value::Null => plain.dimmed().to_string(),
            Value::Bool(_) => plain.yellow().to_string(),
            Value::Number(_) => plain.cyan().to_string(),
            _ => plain.green().to_string(),
        }
    }

    fn render(value: &Value, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);

        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    let label = key.blue().bold();
                    match val {
                        Value::Object(inner) if !inner.is_empty() => {
                            lines.push(format!("{indent}{label}:"));
                            render(val, depth + 1, lines);
                        }
                        Value::Array(items) if !items.is_empty() => {
                            lines.push(format!("{indent}{label}:"));
                            render(val, depth + 1, lines);
                        }
                        Value::Object(_) => lines.push(format!("{indent}{label}: {{}}")),
                        Value::Array(_) => lines.push(format!("{indent}{label}: []")),
                        _ => lines.push(format!("{indent}{label}: {}", paint(val))),
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if item.is_object() {
                        lines.push(format!("{indent}-"));
                        render(item, depth + 1, lines);
                    } else {
                        lines.push(format!("{indent}- {}", paint(item)));
                    }
                }
            }
            _ => lines.push(format!("{indent}{}", paint(value))),
        }
    }
}
