use crate::error::{FunctionError, FunctionResult};
use crate::function_set::{Arguments, BoundFunctionSet, FunctionSetDecl};
use crate::project::AssemblyInfo;
use crate::value::{Value, ValueType};

pub const NAMESPACE: &str = "task";

pub fn declaration() -> FunctionSetDecl {
    FunctionSetDecl::new(NAMESPACE)
        .function("exists", &[ValueType::String], ValueType::Boolean, exists)
        .function(
            "get-assembly",
            &[ValueType::String],
            AssemblyInfo::VALUE_TYPE,
            get_assembly,
        )
}

fn exists(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let name = args.string(0)?;
    Ok(Value::Boolean(set.context().has_task(name)))
}

fn get_assembly(set: &BoundFunctionSet, args: &Arguments<'_>) -> FunctionResult<Value> {
    let name = args.string(0)?;
    let builder = set
        .context()
        .task_builder(name)
        .ok_or_else(|| FunctionError::UnknownTask(name.to_string()))?;
    Ok(Value::Object(builder.assembly))
}
