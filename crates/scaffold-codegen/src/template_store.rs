//! Sandboxed template loading.
//!
//! A [`TemplateStore`] reads template files from a single trusted root
//! directory. Every requested name is resolved the way `realpath` would
//! (symlinks followed, `..` applied to the real parent) and the result must
//! stay inside the root. Anything else is a confinement violation, reported
//! separately from a missing file.
//!
//! Templates are re-read on every call; there is no cache.
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::TemplateStore;
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("greeting.hbs"), "Hello {{name}}").unwrap();
//!
//! let store = TemplateStore::new(dir.path()).unwrap();
//! assert_eq!(store.load("greeting.hbs").unwrap(), "Hello {{name}}");
//! assert!(store.load("../../etc/passwd").unwrap_err().is_confinement_error());
//! assert!(store.load("missing.hbs").unwrap_err().is_not_found());
//! ```

use crate::TemplateId;
use scaffold_core::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Template files confined to a trusted root directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Creates a store rooted at `root`.
    ///
    /// The root is canonicalized once here; later symlink changes to the root
    /// itself are not observed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the root does not exist or is not a
    /// directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = root.canonicalize().map_err(|e| Error::ConfigError {
            message: format!("template directory {} is not accessible: {e}", root.display()),
        })?;

        if !canonical.is_dir() {
            return Err(Error::ConfigError {
                message: format!("template directory {} is not a directory", root.display()),
            });
        }

        debug!(root = %canonical.display(), "template store ready");
        Ok(Self { root: canonical })
    }

    /// Creates a store over the templates shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the bundled directory is missing.
    pub fn bundled() -> Result<Self> {
        Self::new(bundled_templates_dir())
    }

    /// Returns the canonical trusted root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` and checks it stays inside the root.
    ///
    /// Does not check that the file exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathConfinement`] for absolute paths, `..` traversal
    /// or symlinks that leave the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let resolved = resolve_non_strict(&self.root, Path::new(name));

        if !resolved.starts_with(&self.root) {
            return Err(Error::PathConfinement {
                name: name.to_string(),
                root: self.root.clone(),
            });
        }

        Ok(resolved)
    }

    /// Loads the full text of template `name`.
    ///
    /// # Errors
    ///
    /// - [`Error::PathConfinement`] if `name` resolves outside the root
    /// - [`Error::TemplateNotFound`] if it resolves inside but no file exists
    /// - [`Error::PermissionDenied`] / [`Error::IoError`] if reading fails
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;

        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
                path,
            });
        }

        debug!(template = name, path = %path.display(), "loading template");
        fs::read_to_string(&path).map_err(|e| Error::from_io(&path, e))
    }

    /// Loads a bundled template by its logical id.
    ///
    /// # Errors
    ///
    /// Same as [`TemplateStore::load`].
    pub fn load_id(&self, id: TemplateId) -> Result<String> {
        self.load(id.file_name())
    }
}

/// Directory holding the templates shipped with this crate.
#[must_use]
pub fn bundled_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Resolves `path` against `base` like `realpath` without requiring the
/// target to exist.
///
/// Each existing prefix is canonicalized so symlinks are followed and `..`
/// pops the real parent. Missing tails are appended lexically.
fn resolve_non_strict(base: &Path, path: &Path) -> PathBuf {
    let mut resolved = base.to_path_buf();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => resolved = PathBuf::from(prefix.as_os_str()),
            Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(segment) => {
                resolved.push(segment);
                if let Ok(canonical) = resolved.canonicalize() {
                    resolved = canonical;
                }
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TemplateStore) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let store = TemplateStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_load_returns_content_verbatim() {
        let (_dir, store) = store_with(&[("api/router.hbs", "line1\n  {{resource}}\n")]);
        assert_eq!(store.load("api/router.hbs").unwrap(), "line1\n  {{resource}}\n");
    }

    #[test]
    fn test_load_rereads_every_call() {
        let (dir, store) = store_with(&[("t.hbs", "v1")]);
        assert_eq!(store.load("t.hbs").unwrap(), "v1");
        fs::write(dir.path().join("t.hbs"), "v2").unwrap();
        assert_eq!(store.load("t.hbs").unwrap(), "v2");
    }

    #[test]
    fn test_dot_segments_inside_root_are_allowed() {
        let (_dir, store) = store_with(&[("api/router.hbs", "ok")]);
        assert_eq!(store.load("./api/../api/router.hbs").unwrap(), "ok");
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = TemplateStore::new(dir.path().join("nope")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(TemplateStore::new(&file).unwrap_err().is_config_error());
    }

    #[test]
    fn test_directory_name_is_not_found() {
        let (_dir, store) = store_with(&[("api/router.hbs", "ok")]);
        assert!(store.load("api").unwrap_err().is_not_found());
        assert!(store.load("").unwrap_err().is_not_found());
    }

    #[test]
    fn test_traversal_to_missing_path_is_confinement() {
        let (_dir, store) = store_with(&[]);
        let err = store.load("../definitely-not-here/x.hbs").unwrap_err();
        assert!(err.is_confinement_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_bundled_store_has_every_template() {
        let store = TemplateStore::bundled().unwrap();
        for id in TemplateId::ALL {
            let text = store.load_id(id).unwrap();
            assert!(!text.is_empty(), "{id} is empty");
        }
    }
}
