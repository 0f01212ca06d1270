//==================================================
// File: dispatch.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Invoke built-in functions on behalf of the expression evaluator
// Objective: Resolve call descriptors, coerce arguments, bind function sets
//            lazily per session and translate failures into CallError
//==================================================

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace, warn};

use crate::error::{CallError, FunctionError, FunctionResult, ResolveError};
use crate::function_set::BoundFunctionSet;
use crate::project::{ProjectContext, PropertyView};
use crate::registry::FunctionRegistry;
use crate::value::{Value, ValueType};

//==================================================
// Section 1.0 - Call Descriptors
//==================================================

/// One function call as emitted by the expression parser, with its
/// arguments already evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescriptor {
    pub namespace: String,
    pub function: String,
    pub arguments: Vec<Value>,
}

impl CallDescriptor {
    pub fn new(
        namespace: impl Into<String>,
        function: impl Into<String>,
        arguments: Vec<Value>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            function: function.into(),
            arguments,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.function)
    }
}

//==================================================
// Section 2.0 - Argument Coercion
//==================================================

/// Convert `value` to the declared parameter type.
///
/// Only the conversions listed here exist; everything else is a mismatch.
pub fn coerce(value: &Value, expected: ValueType, index: usize) -> FunctionResult<Value> {
    match (expected, value) {
        (ValueType::String, Value::String(_)) | (ValueType::Boolean, Value::Boolean(_)) => {
            Ok(value.clone())
        }
        (ValueType::Boolean, Value::String(text)) => parse_bool(text)
            .map(Value::Boolean)
            .ok_or_else(|| FunctionError::mismatch(index, expected.name(), value)),
        (ValueType::Object(name), Value::Object(object)) if object.type_name() == name => {
            Ok(value.clone())
        }
        _ => Err(FunctionError::mismatch(index, expected.name(), value)),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

//==================================================
// Section 3.0 - Dispatcher
//==================================================

/// Per-session dispatcher. Function sets are bound to the session's context
/// on first use and reused until the dispatcher is dropped.
#[derive(Debug)]
pub struct Dispatcher<'r> {
    registry: &'r FunctionRegistry,
    context: ProjectContext,
    properties: PropertyView,
    bound: HashMap<String, BoundFunctionSet>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r FunctionRegistry, context: ProjectContext) -> Self {
        let properties = context.properties();
        Self::with_properties(registry, context, properties)
    }

    /// Session whose function sets read properties from `properties` instead
    /// of the context's own collection.
    pub fn with_properties(
        registry: &'r FunctionRegistry,
        context: ProjectContext,
        properties: PropertyView,
    ) -> Self {
        Self {
            registry,
            context,
            properties,
            bound: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &'r FunctionRegistry {
        self.registry
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Namespaces bound so far in this session, sorted.
    pub fn bound_namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bound.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn call(
        &mut self,
        namespace: &str,
        function: &str,
        arguments: Vec<Value>,
    ) -> Result<Value, CallError> {
        self.invoke(&CallDescriptor::new(namespace, function, arguments))
    }

    pub fn invoke(&mut self, call: &CallDescriptor) -> Result<Value, CallError> {
        let namespace = call.namespace.as_str();
        let function = call.function.as_str();
        let registry = self.registry;

        let entry = registry
            .resolve(namespace, function, call.arguments.len())
            .map_err(|err| {
                failed(CallError::from_resolve(
                    err,
                    namespace,
                    function,
                    &call.arguments,
                ))
            })?;

        let coerced = call
            .arguments
            .iter()
            .zip(&entry.descriptor.parameter_types)
            .enumerate()
            .map(|(index, (value, expected))| coerce(value, *expected, index))
            .collect::<FunctionResult<Vec<_>>>()
            .map_err(|err| {
                failed(CallError::from_function(
                    err,
                    namespace,
                    function,
                    &call.arguments,
                ))
            })?;

        if entry.descriptor.deprecated {
            warn!(function = %entry.descriptor.qualified_name(), "deprecated function called");
        }

        let bound = self
            .bind(namespace)
            .map_err(|err| {
                failed(CallError::from_resolve(
                    err,
                    namespace,
                    function,
                    &call.arguments,
                ))
            })?;
        trace!(function = %entry.descriptor, args = coerced.len(), "invoking function");
        bound.call(entry, &coerced).map_err(|err| {
            failed(CallError::from_function(
                err,
                namespace,
                function,
                &call.arguments,
            ))
        })
    }

    /// Evaluate `calls` strictly in order, stopping at the first failure.
    pub fn invoke_all<'c, I>(&mut self, calls: I) -> Result<Vec<Value>, CallError>
    where
        I: IntoIterator<Item = &'c CallDescriptor>,
    {
        calls.into_iter().map(|call| self.invoke(call)).collect()
    }

    fn bind(&mut self, namespace: &str) -> Result<&BoundFunctionSet, ResolveError> {
        let registry = self.registry;
        match self.bound.entry(namespace.to_string()) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let set = registry.function_set(namespace)?.clone();
                debug!(namespace, "binding function set to project context");
                Ok(slot.insert(BoundFunctionSet::bind(
                    set,
                    self.context.clone(),
                    self.properties.clone(),
                )))
            }
        }
    }
}

fn failed(error: CallError) -> CallError {
    debug!(
        function = %error.qualified_name(),
        kind = %error.kind,
        "function call failed"
    );
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::project::AssemblyInfo;

    #[test]
    fn string_to_boolean_is_case_insensitive() {
        assert_eq!(
            coerce(&Value::from("TRUE"), ValueType::Boolean, 0),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            coerce(&Value::from("False"), ValueType::Boolean, 0),
            Ok(Value::Boolean(false))
        );
    }

    #[test]
    fn unparseable_boolean_is_a_mismatch() {
        for text in ["yes", "1", " true", ""] {
            let err = coerce(&Value::from(text), ValueType::Boolean, 2).expect_err("mismatch");
            assert_eq!(err.kind(), ErrorKind::ArgumentTypeMismatch);
        }
    }

    #[test]
    fn boolean_is_not_coerced_to_string() {
        let err = coerce(&Value::Boolean(true), ValueType::String, 0).expect_err("mismatch");
        assert_eq!(
            err,
            FunctionError::ArgumentTypeMismatch {
                index: 0,
                expected: "string".into(),
                actual: "boolean".into(),
                value: "true".into(),
            }
        );
    }

    #[test]
    fn objects_pass_through_only_with_matching_type() {
        let assembly = Value::object(AssemblyInfo::new("Tasks", "1.0.0.0"));
        assert_eq!(
            coerce(&assembly, AssemblyInfo::VALUE_TYPE, 0),
            Ok(assembly.clone())
        );
        assert!(coerce(&assembly, ValueType::Object("module"), 0).is_err());
        assert!(coerce(&assembly, ValueType::String, 0).is_err());
        assert!(coerce(&Value::from("Tasks"), AssemblyInfo::VALUE_TYPE, 0).is_err());
    }
}

//==================================================
// End of file
//==================================================
