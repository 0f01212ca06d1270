use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::descriptor::{FunctionDescriptor, FunctionKey};
use crate::error::{FunctionError, FunctionResult};
use crate::project::{ProjectContext, PropertyView};
use crate::value::{HostObject, Value, ValueType};

pub type FunctionHandler = fn(&BoundFunctionSet, &Arguments<'_>) -> FunctionResult<Value>;

/// A descriptor paired with the implementation it announces.
#[derive(Clone)]
pub struct FunctionEntry {
    pub descriptor: FunctionDescriptor,
    pub handler: FunctionHandler,
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Declaration of a function set as written by its module, before the
/// registry has validated it.
#[derive(Debug, Clone)]
pub struct FunctionSetDecl {
    namespace: String,
    functions: Vec<FunctionEntry>,
}

impl FunctionSetDecl {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            functions: Vec::new(),
        }
    }

    pub fn function(
        self,
        name: &str,
        parameters: &[ValueType],
        returns: ValueType,
        handler: FunctionHandler,
    ) -> Self {
        self.push(name, parameters, returns, handler, false)
    }

    /// Declares a function that still works but should no longer be used.
    pub fn deprecated(
        self,
        name: &str,
        parameters: &[ValueType],
        returns: ValueType,
        handler: FunctionHandler,
    ) -> Self {
        self.push(name, parameters, returns, handler, true)
    }

    fn push(
        mut self,
        name: &str,
        parameters: &[ValueType],
        returns: ValueType,
        handler: FunctionHandler,
        deprecated: bool,
    ) -> Self {
        let mut descriptor = FunctionDescriptor::new(&self.namespace, name, parameters, returns);
        descriptor.deprecated = deprecated;
        self.functions.push(FunctionEntry {
            descriptor,
            handler,
        });
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn functions(&self) -> &[FunctionEntry] {
        &self.functions
    }

    pub(crate) fn into_parts(self) -> (String, Vec<FunctionEntry>) {
        (self.namespace, self.functions)
    }
}

/// A validated function set as held by the registry.
#[derive(Debug)]
pub struct FunctionSet {
    namespace: String,
    entries: BTreeMap<FunctionKey, FunctionEntry>,
}

impl FunctionSet {
    pub(crate) fn new(namespace: String, entries: BTreeMap<FunctionKey, FunctionEntry>) -> Self {
        Self { namespace, entries }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn get(&self, name: &str, arity: usize) -> Option<&FunctionEntry> {
        self.entries.get(&FunctionKey::new(name, arity))
    }

    /// Descriptors ordered by name, then arity.
    pub fn descriptors(&self) -> impl Iterator<Item = &FunctionDescriptor> + Clone {
        self.entries.values().map(|entry| &entry.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A function set bound to the state of one evaluation session.
///
/// Binding does not validate anything; every precondition is checked by the
/// individual function when it runs.
#[derive(Debug, Clone)]
pub struct BoundFunctionSet {
    set: Arc<FunctionSet>,
    context: ProjectContext,
    properties: PropertyView,
}

impl BoundFunctionSet {
    pub fn bind(set: Arc<FunctionSet>, context: ProjectContext, properties: PropertyView) -> Self {
        Self {
            set,
            context,
            properties,
        }
    }

    pub fn namespace(&self) -> &str {
        self.set.namespace()
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    pub fn properties(&self) -> &PropertyView {
        &self.properties
    }

    pub(crate) fn call(&self, entry: &FunctionEntry, args: &[Value]) -> FunctionResult<Value> {
        (entry.handler)(self, &Arguments::new(args))
    }
}

/// Coerced argument list handed to a function implementation.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &'a [Value] {
        self.values
    }

    fn get(&self, index: usize, expected: &str) -> FunctionResult<&'a Value> {
        self.values
            .get(index)
            .ok_or_else(|| FunctionError::ArgumentTypeMismatch {
                index,
                expected: expected.to_string(),
                actual: "nothing".to_string(),
                value: String::new(),
            })
    }

    pub fn string(&self, index: usize) -> FunctionResult<&'a str> {
        let value = self.get(index, ValueType::String.name())?;
        value
            .as_str()
            .ok_or_else(|| FunctionError::mismatch(index, ValueType::String.name(), value))
    }

    pub fn boolean(&self, index: usize) -> FunctionResult<bool> {
        let value = self.get(index, ValueType::Boolean.name())?;
        value
            .as_bool()
            .ok_or_else(|| FunctionError::mismatch(index, ValueType::Boolean.name(), value))
    }

    pub fn object<T: HostObject>(&self, index: usize, type_name: &str) -> FunctionResult<&'a T> {
        let value = self.get(index, type_name)?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| FunctionError::mismatch(index, type_name, value))
    }
}
