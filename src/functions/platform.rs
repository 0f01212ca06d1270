use crate::error::FunctionResult;
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "platform";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("get-name", &[], ValueType::String, get_name)
        .function("is-windows", &[], ValueType::Boolean, is_windows)
        .deprecated("is-win32", &[], ValueType::Boolean, is_windows)
        .function("is-unix", &[], ValueType::Boolean, is_unix)
}

fn get_name(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::from(set.context().platform().name()))
}

fn is_windows(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::Boolean(set.context().platform().is_windows()))
}

fn is_unix(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::Boolean(set.context().platform().is_unix()))
}
