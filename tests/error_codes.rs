use buildfuncs::{ErrorKind, FunctionError, FunctionRegistry, FunctionSetDecl, RegistrationError};

#[test]
fn error_kinds_have_stable_codes() {
    let expected = [
        (ErrorKind::UnknownNamespace, "unknown-namespace"),
        (ErrorKind::UnknownFunction, "unknown-function"),
        (ErrorKind::ArgumentTypeMismatch, "argument-type-mismatch"),
        (ErrorKind::InvalidState, "invalid-state"),
        (ErrorKind::UnknownTarget, "unknown-target"),
        (ErrorKind::UnknownTask, "unknown-task"),
        (ErrorKind::UnknownProperty, "unknown-property"),
        (ErrorKind::FileNotFound, "file-not-found"),
    ];
    for (kind, code) in expected {
        assert_eq!(kind.as_str(), code);
        assert_eq!(
            serde_json::to_value(kind).expect("serialise"),
            serde_json::Value::from(code)
        );
    }
}

#[test]
fn file_not_found_maps_to_its_kind() {
    let err = FunctionError::FileNotFound {
        file: "nunit.framework.dll".into(),
        searched: 0,
    };
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(err.to_string().contains("nunit.framework.dll"));
}

#[test]
fn builtin_namespace_cannot_be_registered_twice() {
    let mut registry = FunctionRegistry::with_builtins().expect("builtins");
    let err = registry
        .register(FunctionSetDecl::new("project"))
        .expect_err("duplicate");
    assert_eq!(err, RegistrationError::DuplicateNamespace("project".into()));
    assert_eq!(err.to_string(), "namespace 'project' is already registered");
}
