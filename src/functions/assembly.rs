use crate::error::FunctionResult;
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::project::AssemblyInfo;
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "assembly";

const ASSEMBLY: &[ValueType] = &[AssemblyInfo::VALUE_TYPE];

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("get-full-name", ASSEMBLY, ValueType::String, get_full_name)
        .function("get-name", ASSEMBLY, ValueType::String, get_name)
        .function("get-version", ASSEMBLY, ValueType::String, get_version)
        .function("get-location", ASSEMBLY, ValueType::String, get_location)
}

fn assembly<'a>(args: &Arguments<'a>) -> FunctionResult<&'a AssemblyInfo> {
    args.object::<AssemblyInfo>(0, AssemblyInfo::TYPE_NAME)
}

fn get_full_name(_set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(assembly(args)?.full_name()))
}

fn get_name(_set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(assembly(args)?.name.clone()))
}

fn get_version(_set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    Ok(Value::String(assembly(args)?.version.clone()))
}

fn get_location(_set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let location = assembly(args)?
        .location
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    Ok(Value::String(location))
}
