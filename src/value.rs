use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Opaque host object handed between functions in a chained expression.
///
/// The dispatcher only passes these through when the declared parameter type
/// name equals [`HostObject::type_name`] exactly.
pub trait HostObject: Any + fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// Text used when the object is rendered into a diagnostic.
    fn describe(&self) -> String {
        self.type_name().to_string()
    }
}

/// Declared type of a parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Object(&'static str),
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Object(name) => name,
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An already-evaluated expression value.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Boolean(bool),
    Object(Arc<dyn HostObject>),
}

impl Value {
    pub fn object<T: HostObject>(object: T) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => ValueType::String.name(),
            Value::Boolean(_) => ValueType::Boolean.name(),
            Value::Object(object) => object.type_name(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn downcast_ref<T: HostObject>(&self) -> Option<&T> {
        match self {
            Value::Object(object) => object.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Render the value the way it would appear in a build script.
    pub fn render(&self) -> String {
        match self {
            Value::String(text) => format!("'{text}'"),
            Value::Boolean(flag) => flag.to_string(),
            Value::Object(object) => format!("<{}>", object.describe()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Object(left), Value::Object(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(text) => f.write_str(text),
            Value::Boolean(flag) => write!(f, "{flag}"),
            Value::Object(object) => f.write_str(&object.describe()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

pub(crate) fn render_arguments(args: &[Value]) -> String {
    args.iter()
        .map(Value::render)
        .collect::<Vec<_>>()
        .join(", ")
}
