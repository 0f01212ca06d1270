use crate::error::{FunctionError, FunctionResult};
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::project::PropertyEntry;
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "property";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("exists", &[ValueType::String], ValueType::Boolean, exists)
        .function("get-value", &[ValueType::String], ValueType::String, get_value)
        .function("is-readonly", &[ValueType::String], ValueType::Boolean, is_readonly)
        .function("is-dynamic", &[ValueType::String], ValueType::Boolean, is_dynamic)
}

fn exists(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let name = args.string(0)?;
    Ok(Value::Boolean(set.properties().contains(name)))
}

// Dynamic properties hold their unexpanded text; expansion belongs to the evaluator.
fn get_value(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    lookup(set, args).map(|entry| Value::String(entry.value))
}

fn is_readonly(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    lookup(set, args).map(|entry| Value::Boolean(entry.read_only))
}

fn is_dynamic(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    lookup(set, args).map(|entry| Value::Boolean(entry.dynamic))
}

fn lookup(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<PropertyEntry> {
    let name = args.string(0)?;
    set.properties()
        .get(name)
        .ok_or_else(|| FunctionError::UnknownProperty(name.to_string()))
}
