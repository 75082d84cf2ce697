//! Path traversal tests for `TemplateStore`.

use scaffold_codegen::TemplateStore;
use std::fs;
use tempfile::TempDir;

/// Builds `<tmp>/templates/{api/router.hbs}` plus a secret file beside it.
fn fixture() -> (TempDir, TemplateStore) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("templates");
    fs::create_dir_all(root.join("api")).unwrap();
    fs::write(root.join("api/router.hbs"), "router {{resource}}").unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    fs::write(dir.path().join("secret.txt"), "secret").unwrap();
    let store = TemplateStore::new(&root).unwrap();
    (dir, store)
}

#[test]
fn test_parent_traversal_is_confinement_error() {
    let (_dir, store) = fixture();

    for name in [
        "../../etc/passwd",
        "../../../.env",
        "../.env",
        "../secret.txt",
        "api/../../secret.txt",
        "api/../../../../../../../../etc/passwd",
    ] {
        let err = store.load(name).unwrap_err();
        assert!(
            err.is_confinement_error(),
            "'{name}' should be a confinement error, got: {err}"
        );
        assert!(!err.is_not_found(), "'{name}' must not be reported as not found");
    }
}

#[test]
fn test_absolute_path_is_confinement_error() {
    let (dir, store) = fixture();

    let err = store.load("/etc/passwd").unwrap_err();
    assert!(err.is_confinement_error());

    let outside = dir.path().join("secret.txt");
    let err = store.load(outside.to_str().unwrap()).unwrap_err();
    assert!(err.is_confinement_error());
}

#[test]
fn test_absolute_path_inside_root_is_allowed() {
    let (_dir, store) = fixture();
    let inside = store.root().join("api/router.hbs");
    assert_eq!(store.load(inside.to_str().unwrap()).unwrap(), "router {{resource}}");
}

#[test]
fn test_confined_missing_template_is_not_found() {
    let (_dir, store) = fixture();

    for name in ["missing.hbs", "api/missing.hbs", "component/react.hbs"] {
        let err = store.load(name).unwrap_err();
        assert!(err.is_not_found(), "'{name}' should be not found, got: {err}");
        assert!(!err.is_confinement_error());
    }
}

#[test]
fn test_confinement_message_names_request() {
    let (_dir, store) = fixture();
    let message = store.load("../../etc/passwd").unwrap_err().to_string();
    assert!(message.starts_with("Path confinement violation"));
    assert!(message.contains("../../etc/passwd"));
}

#[cfg(unix)]
#[test]
fn test_symlink_escape_is_confinement_error() {
    use std::os::unix::fs::symlink;

    let (dir, store) = fixture();
    symlink(dir.path().join("secret.txt"), store.root().join("leak.hbs")).unwrap();
    symlink(dir.path(), store.root().join("up")).unwrap();

    assert!(store.load("leak.hbs").unwrap_err().is_confinement_error());
    assert!(store.load("up/secret.txt").unwrap_err().is_confinement_error());
    assert!(store.load("up/templates/api/router.hbs").is_ok());
}

#[cfg(unix)]
#[test]
fn test_symlink_within_root_is_allowed() {
    use std::os::unix::fs::symlink;

    let (_dir, store) = fixture();
    symlink(store.root().join("api/router.hbs"), store.root().join("alias.hbs")).unwrap();
    assert_eq!(store.load("alias.hbs").unwrap(), "router {{resource}}");
}
