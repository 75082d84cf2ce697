//! Template loading and rendering for scaffold.
//!
//! Two pieces:
//! - [`TemplateStore`] loads template text from a trusted root directory and
//!   refuses any name that resolves outside it
//! - [`TemplateEngine`] substitutes flat `{{key}}` placeholders
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::{TemplateEngine, TemplateId, TemplateStore};
//! use serde_json::json;
//!
//! let store = TemplateStore::bundled()?;
//! let text = store.load_id(TemplateId::ReactIndex)?;
//! let out = TemplateEngine::new().render(
//!     TemplateId::ReactIndex.as_str(),
//!     &text,
//!     &json!({"name": "NavBar", "name_lower": "navbar"}),
//! )?;
//! assert!(out.contains("from './NavBar'"));
//! # Ok::<(), scaffold_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod template_engine;
mod template_id;
mod template_store;

pub use template_engine::{TemplateEngine, placeholders};
pub use template_id::TemplateId;
pub use template_store::{TemplateStore, bundled_templates_dir};
