//==============================================
// File: tests/dispatch.rs
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Dispatcher contract regression runner
// Objective: Validate resolution, coercion, binding and error translation
//==============================================

#[path = "common/util.rs"]
mod util;

use buildfuncs::{
    Arguments, AssemblyInfo, BoundFunctionSet, CallDescriptor, Dispatcher, ErrorKind,
    FunctionError, FunctionRegistry, FunctionResult, FunctionSetDecl, PropertyView, Target, Value,
    ValueType,
};
use util::{call, context, flag, registry, text};

//==============================================
// Section 1.0 - Resolution
//==============================================

#[test]
fn every_registered_signature_resolves_through_invoke() {
    let ctx = context();
    let mut dispatcher = Dispatcher::new(registry(), ctx);
    for descriptor in registry().descriptors() {
        let args = descriptor
            .parameter_types
            .iter()
            .map(|ty| match ty {
                ValueType::String => Value::from("x"),
                ValueType::Boolean => Value::Boolean(true),
                ValueType::Object(_) => Value::object(AssemblyInfo::new("x", "1.0")),
            })
            .collect();
        let outcome = dispatcher.invoke(&CallDescriptor::new(
            descriptor.namespace.clone(),
            descriptor.name.clone(),
            args,
        ));
        if let Err(err) = outcome {
            assert!(
                !matches!(err.kind, ErrorKind::UnknownNamespace | ErrorKind::UnknownFunction),
                "{descriptor} failed to resolve: {err}"
            );
        }
    }
}

#[test]
fn builtin_namespaces_are_listed_in_order() {
    let names: Vec<&str> = registry().namespaces().collect();
    assert_eq!(
        names,
        vec!["assembly", "nant", "platform", "project", "property", "target", "task"]
    );
}

#[test]
fn unknown_namespace_is_reported() {
    let mut dispatcher = Dispatcher::new(registry(), context());
    let err = call(&mut dispatcher, "framework::get-version", &["x"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownNamespace);
    assert_eq!(err.namespace, "framework");
    assert_eq!(err.function, "get-version");
    assert_eq!(
        err.message,
        "framework::get-version('x') failed: unknown namespace 'framework'"
    );
}

#[test]
fn wrong_arity_looks_like_unknown_function() {
    let mut dispatcher = Dispatcher::new(registry(), context());
    let wrong_arity = call(&mut dispatcher, "target::exists", &[]).unwrap_err();
    let unknown = call(&mut dispatcher, "target::vanish", &["x"]).unwrap_err();
    let extra = call(&mut dispatcher, "target::exists", &["a", "b"]).unwrap_err();
    assert_eq!(wrong_arity.kind, ErrorKind::UnknownFunction);
    assert_eq!(unknown.kind, ErrorKind::UnknownFunction);
    assert!(wrong_arity.message.contains("target::exists/0"), "{}", wrong_arity.message);
    assert!(unknown.message.contains("target::vanish/1"), "{}", unknown.message);
    assert!(unknown.message.starts_with("target::vanish('x') failed"), "{}", unknown.message);
    assert_eq!(extra.kind, ErrorKind::UnknownFunction);
    assert_eq!(
        extra.message,
        "target::exists('a', 'b') failed: unknown function 'target::exists/2'"
    );
}

//==============================================
// Section 2.0 - Binding
//==============================================

#[test]
fn sets_are_bound_lazily_once_per_namespace() {
    let mut dispatcher = Dispatcher::new(registry(), context());
    assert!(dispatcher.bound_namespaces().is_empty());
    call(&mut dispatcher, "project::get-name", &[]).unwrap();
    call(&mut dispatcher, "project::get-base-directory", &[]).unwrap();
    call(&mut dispatcher, "target::exists", &["x"]).unwrap();
    assert_eq!(dispatcher.bound_namespaces(), vec!["project", "target"]);
}

#[test]
fn failed_resolution_binds_nothing() {
    let mut dispatcher = Dispatcher::new(registry(), context());
    let _ = call(&mut dispatcher, "project::get-name", &["extra"]);
    assert!(dispatcher.bound_namespaces().is_empty());
}

#[test]
fn bound_sets_see_state_changed_after_binding() {
    let ctx = context();
    let mut dispatcher = Dispatcher::new(registry(), ctx.clone());
    assert!(!flag(call(&mut dispatcher, "target::exists", &["late"]).unwrap()));
    ctx.add_target(Target::new("late"));
    assert!(flag(call(&mut dispatcher, "target::exists", &["late"]).unwrap()));
}

#[test]
fn separately_supplied_property_view_is_used() {
    let ctx = context();
    ctx.properties().set("from.context", "1");
    let legacy = PropertyView::new();
    legacy.set("from.legacy", "1");
    let mut dispatcher = Dispatcher::with_properties(registry(), ctx, legacy);
    assert!(flag(call(&mut dispatcher, "property::exists", &["from.legacy"]).unwrap()));
    assert!(!flag(call(&mut dispatcher, "property::exists", &["from.context"]).unwrap()));
}

//==============================================
// Section 3.0 - Coercion & ordering
//==============================================

fn echo_flag(_set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::Boolean(args.boolean(0)?))
}

fn fail_state(_set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Err(FunctionError::InvalidState("always".into()))
}

fn custom_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::with_builtins().expect("builtins");
    registry
        .register(
            FunctionSetDecl::new("probe")
                .function("echo", &[ValueType::Boolean], ValueType::Boolean, echo_flag)
                .function("fail", &[], ValueType::String, fail_state),
        )
        .expect("custom set");
    registry
}

#[test]
fn textual_booleans_are_coerced() {
    let registry = custom_registry();
    let mut dispatcher = Dispatcher::new(&registry, context());
    assert!(flag(call(&mut dispatcher, "probe::echo", &["TRUE"]).unwrap()));
    assert!(!flag(call(&mut dispatcher, "probe::echo", &["false"]).unwrap()));
    assert!(
        flag(
            dispatcher
                .call("probe", "echo", vec![Value::Boolean(true)])
                .unwrap()
        )
    );

    let err = call(&mut dispatcher, "probe::echo", &["maybe"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ArgumentTypeMismatch);
    assert!(err.message.contains("probe::echo('maybe')"), "{}", err.message);
}

#[test]
fn implementation_failures_are_wrapped_with_call_site() {
    let registry = custom_registry();
    let mut dispatcher = Dispatcher::new(&registry, context());
    let err = call(&mut dispatcher, "probe::fail", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidState);
    assert_eq!(err.qualified_name(), "probe::fail");
    assert_eq!(err.message, "probe::fail() failed: always");
}

#[test]
fn invoke_all_runs_in_order_and_stops_at_first_failure() {
    let ctx = context();
    ctx.set_name("Acme");
    let mut dispatcher = Dispatcher::new(registry(), ctx);
    let calls = vec![
        CallDescriptor::new("project", "get-name", vec![]),
        CallDescriptor::new("target", "exists", vec![Value::from("clean")]),
    ];
    let values = dispatcher.invoke_all(&calls).unwrap();
    assert_eq!(values, vec![Value::from("Acme"), Value::Boolean(false)]);

    let failing = vec![
        CallDescriptor::new("project", "get-name", vec![]),
        CallDescriptor::new("target", "get-current-target", vec![]),
        CallDescriptor::new("nant", "missing", vec![]),
    ];
    let err = dispatcher.invoke_all(&failing).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidState);
}

#[test]
fn call_errors_render_as_their_message() {
    let mut dispatcher = Dispatcher::new(registry(), context());
    let err = call(&mut dispatcher, "property::is-readonly", &["debug"]).unwrap_err();
    assert_eq!(err.to_string(), err.message);
    assert_eq!(err.code_str(), "unknown-property");
    assert_eq!(
        text(call(&mut dispatcher, "project::get-name", &[]).unwrap()),
        ""
    );
}

//==============================================
// End of file
//==============================================
