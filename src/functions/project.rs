use std::path::Path;

use url::Url;

use crate::error::FunctionResult;
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "project";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("get-name", &[], ValueType::String, get_name)
        .function("get-buildfile-path", &[], ValueType::String, get_buildfile_path)
        .function("get-buildfile-uri", &[], ValueType::String, get_buildfile_uri)
        .function("get-default-target", &[], ValueType::String, get_default_target)
        .function("get-base-directory", &[], ValueType::String, get_base_directory)
}

fn get_name(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(set.context().name()))
}

fn get_buildfile_path(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    let path = set
        .context()
        .build_file()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    Ok(Value::String(path))
}

fn get_buildfile_uri(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    let context = set.context();
    let uri = context
        .build_file()
        .map(|path| file_uri(&context.resolve_path(&path)))
        .unwrap_or_default();
    Ok(Value::String(uri))
}

fn get_default_target(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(set.context().default_target()))
}

fn get_base_directory(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(
        set.context().base_directory().display().to_string(),
    ))
}

/// `file://` URI for an absolute path with every reserved byte of each
/// segment percent-encoded. Paths that are not absolute yield `""`.
fn file_uri(path: &Path) -> String {
    Url::from_file_path(path)
        .map(String::from)
        .unwrap_or_default()
}
