use std::fmt;

use serde::Serialize;

use crate::value::ValueType;

/// Static metadata for one callable built-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub namespace: String,
    pub name: String,
    pub parameter_types: Vec<ValueType>,
    pub return_type: ValueType,
    pub deprecated: bool,
}

impl FunctionDescriptor {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        parameter_types: &[ValueType],
        return_type: ValueType,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            parameter_types: parameter_types.to_vec(),
            return_type,
            deprecated: false,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    pub fn key(&self) -> FunctionKey {
        FunctionKey::new(&self.name, self.arity())
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameter_types
            .iter()
            .map(|ty| ty.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}::{}({params}) -> {}",
            self.namespace, self.name, self.return_type
        )?;
        if self.deprecated {
            f.write_str(" [deprecated]")?;
        }
        Ok(())
    }
}

/// Lookup key inside one namespace: functions overload by arity only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionKey {
    pub name: String,
    pub arity: usize,
}

impl FunctionKey {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}
