use crate::error::{FunctionError, FunctionResult};
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "target";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("exists", &[ValueType::String], ValueType::Boolean, exists)
        .function("get-current-target", &[], ValueType::String, get_current_target)
        .function("has-executed", &[ValueType::String], ValueType::Boolean, has_executed)
}

fn exists(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let name = args.string(0)?;
    Ok(Value::Boolean(set.context().has_target(name)))
}

fn get_current_target(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    set.context()
        .current_target()
        .map(Value::String)
        .ok_or_else(|| FunctionError::InvalidState("no target is being executed".to_string()))
}

fn has_executed(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let name = args.string(0)?;
    set.context()
        .target(name)
        .map(|target| Value::Boolean(target.executed))
        .ok_or_else(|| FunctionError::UnknownTarget(name.to_string()))
}
