use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::value::{HostObject, ValueType};

/// Identity of the module a task (or the host itself) was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssemblyInfo {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_culture")]
    pub culture: String,
    #[serde(default)]
    pub location: Option<PathBuf>,
}

fn default_version() -> String {
    "0.0.0.0".to_string()
}

fn default_culture() -> String {
    "neutral".to_string()
}

impl AssemblyInfo {
    pub const TYPE_NAME: &'static str = "assembly";
    pub const VALUE_TYPE: ValueType = ValueType::Object(Self::TYPE_NAME);

    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            culture: default_culture(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Identity of this crate, used when the host does not name itself.
    pub fn host_default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn full_name(&self) -> String {
        format!(
            "{}, Version={}, Culture={}",
            self.name, self.version, self.culture
        )
    }
}

impl HostObject for AssemblyInfo {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn describe(&self) -> String {
        format!("assembly {}", self.name)
    }
}

/// A task name known to the build together with the assembly that provides it.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    pub name: String,
    pub assembly: Arc<AssemblyInfo>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>, assembly: AssemblyInfo) -> Self {
        Self {
            name: name.into(),
            assembly: Arc::new(assembly),
        }
    }
}
