use std::path::{Path, PathBuf};

use crate::error::{FunctionError, FunctionResult};
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::probing::scan_probing_paths;
use crate::project::AssemblyInfo;
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "nant";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("get-base-directory", &[], ValueType::String, get_base_directory)
        .function("get-assembly", &[], AssemblyInfo::VALUE_TYPE, get_assembly)
        .function(
            "scan-probing-paths",
            &[ValueType::String],
            ValueType::String,
            scan_from_host,
        )
        .function(
            "scan-probing-paths",
            &[ValueType::String, ValueType::String],
            ValueType::String,
            scan_from_directory,
        )
}

fn get_base_directory(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(
        set.context().host_base_directory().display().to_string(),
    ))
}

fn get_assembly(set: &BoundFunctionSet, _args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::Object(set.context().host_assembly()))
}

fn scan_from_host(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let file_name = args.string(0)?;
    scan(set, &set.context().host_base_directory(), file_name)
}

// (baseDirectory, fileName): relative probing paths resolve against the
// given directory, itself relative to the project base directory.
fn scan_from_directory(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let base_directory = args.string(0)?;
    let file_name = args.string(1)?;
    let base = set.context().resolve_path(Path::new(base_directory));
    scan(set, &base, file_name)
}

fn scan(set: &BoundFunctionSet, base: &Path, file_name: &str) -> FunctionResult<Value> {
    let probing_paths: Vec<PathBuf> = set.context().probing_paths();
    scan_probing_paths(base, &probing_paths, file_name)
        .map(|found| Value::String(found.display().to_string()))
        .ok_or_else(|| FunctionError::FileNotFound {
            file: file_name.to_string(),
            searched: probing_paths.len(),
        })
}
