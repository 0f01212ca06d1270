//==================================================
// File: functions/mod.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Built-in function sets
// Objective: Static registration table consumed by FunctionRegistry
//==================================================

use crate::error::RegistrationError;
use crate::function_set::FunctionSetDecl;
use crate::registry::FunctionRegistry;

pub mod assembly;
pub mod nant;
pub mod platform;
pub mod project;
pub mod property;
pub mod target;
pub mod task;

/// Every built-in set, registered once at startup.
pub const BUILTIN_SETS: &[fn() -> FunctionSetDecl] = &[
    assembly::declaration,
    nant::declaration,
    platform::declaration,
    project::declaration,
    property::declaration,
    target::declaration,
    task::declaration,
];

pub fn register_builtins(registry: &mut FunctionRegistry) -> Result<(), RegistrationError> {
    for declare in BUILTIN_SETS {
        registry.register(declare())?;
    }
    Ok(())
}
