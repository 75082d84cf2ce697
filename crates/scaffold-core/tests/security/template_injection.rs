//! Template injection tests.
//!
//! Every identifier class must reject `{` and `}` with the injection-specific
//! error, regardless of whether the rest of the value is well formed.

use scaffold_core::{
    ComponentName, Error, FunctionName, IdentifierKind, ModuleName, ResourceName,
    validate_function_names, validate_identifier,
};

const INJECTION_PAYLOADS: &[&str] = &[
    "{resource}",
    "{{resource}}",
    "user{name}",
    "{__import__('os').system('id')}",
    "users}",
    "{",
    "}",
    "{{#each this}}{{/each}}",
    "User{Component}",
];

const ALL_KINDS: [IdentifierKind; 4] = [
    IdentifierKind::Resource,
    IdentifierKind::Component,
    IdentifierKind::Module,
    IdentifierKind::Function,
];

#[test]
fn test_every_kind_rejects_braces_as_injection() {
    for kind in ALL_KINDS {
        for payload in INJECTION_PAYLOADS {
            let err = validate_identifier(kind, payload).unwrap_err();
            assert!(
                err.is_injection_attempt(),
                "{kind} '{payload}' should be an injection error, got: {err}"
            );
            assert!(err.is_validation_error());
        }
    }
}

#[test]
fn test_injection_checked_before_structure() {
    // Lowercase first letter would fail the component rule, but the brace wins.
    let err = ComponentName::new("nav{bar}").unwrap_err();
    assert!(err.is_injection_attempt());

    // Leading digit would fail the module rule, but the brace wins.
    let err = ModuleName::new("1{x}").unwrap_err();
    assert!(err.is_injection_attempt());
}

#[test]
fn test_empty_checked_before_injection() {
    let err = ResourceName::new("").unwrap_err();
    assert!(err.is_validation_error());
    assert!(!err.is_injection_attempt());
}

#[test]
fn test_injection_message_is_distinguishable() {
    let injection = ResourceName::new("{users}").unwrap_err().to_string();
    let format = ResourceName::new("users!").unwrap_err().to_string();

    assert!(injection.contains("Curly braces are not allowed"));
    assert!(injection.contains("template injection risk"));
    assert!(!format.contains("Curly braces"));
}

#[test]
fn test_injection_error_carries_value() {
    match FunctionName::new("get_{user}").unwrap_err() {
        Error::TemplateInjection { kind, value } => {
            assert_eq!(kind, IdentifierKind::Function);
            assert_eq!(value, "get_{user}");
        }
        other => panic!("expected TemplateInjection, got {other:?}"),
    }
}

#[test]
fn test_single_bad_function_rejects_whole_list() {
    let err = validate_function_names(&["create_user", "delete_{user}", "get_user"]).unwrap_err();
    assert!(err.is_injection_attempt());
}

#[test]
fn test_other_shell_and_path_characters_rejected() {
    for payload in ["../users", "users/admin", "users;rm", "users$HOME", "users\n"] {
        let err = ResourceName::new(payload).unwrap_err();
        assert!(err.is_validation_error(), "'{payload}' should be rejected");
        assert!(!err.is_injection_attempt());
    }
}
