//=====================================================
// File: lib.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: buildfuncs library main interface
// Objective: Export the function registry, dispatcher, project context and
//            built-in function sets used by the build-script evaluator
//=====================================================

pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod function_set;
pub mod functions;
pub mod platform;
pub mod probing;
pub mod project;
pub mod registry;
pub mod value;

pub use config::{ConfigError, SessionConfig};
pub use descriptor::{FunctionDescriptor, FunctionKey};
pub use dispatch::{CallDescriptor, Dispatcher, coerce};
pub use error::{
    CallError, ErrorKind, FunctionError, FunctionResult, RegistrationError, ResolveError,
};
pub use function_set::{
    Arguments, BoundFunctionSet, FunctionEntry, FunctionHandler, FunctionSet, FunctionSetDecl,
};
pub use platform::HostPlatform;
pub use project::{AssemblyInfo, HostInfo, ProjectContext, PropertyEntry, PropertyView, Target, TaskBuilder};
pub use registry::FunctionRegistry;
pub use value::{HostObject, Value, ValueType};

//=====================================================
// End of file
//=====================================================
