//==================================================
// File: config.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Session configuration for function evaluation
// Objective: Load a TOML description of the project and host and turn it
//            into a ProjectContext
//==================================================

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::platform::HostPlatform;
use crate::project::{AssemblyInfo, HostInfo, ProjectContext, PropertyEntry, Target, TaskBuilder};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read session config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
}

//==================================================
// Section 1.0 - Config Types
//==================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub host: HostSection,
    #[serde(default)]
    pub platform: Option<HostPlatform>,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub properties: Vec<PropertySection>,
    #[serde(default)]
    pub tasks: Vec<TaskSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub build_file: Option<PathBuf>,
    #[serde(default)]
    pub default_target: String,
    #[serde(default)]
    pub base_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    #[serde(default)]
    pub base_directory: Option<PathBuf>,
    #[serde(default)]
    pub probing_paths: Vec<PathBuf>,
    #[serde(default)]
    pub assembly: Option<AssemblyInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySection {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub dynamic: bool,
}

impl PropertySection {
    fn into_entry(self) -> (String, PropertyEntry) {
        let entry = PropertyEntry {
            value: self.value,
            read_only: self.read_only,
            dynamic: self.dynamic,
        };
        (self.name, entry)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSection {
    pub name: String,
    pub assembly: AssemblyInfo,
}

//==================================================
// Section 2.0 - Loading
//==================================================

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file. Relative paths in `[project]` and `[host]` are
    /// resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.anchor_paths(&root);
        debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    fn anchor_paths(&mut self, root: &Path) {
        let base = match self.project.base_directory.take() {
            Some(base) => root.join(base),
            None => root.to_path_buf(),
        };
        self.project.base_directory = Some(base.clone());
        if let Some(build_file) = self.project.build_file.as_mut() {
            *build_file = base.join(&*build_file);
        }
        if let Some(host_base) = self.host.base_directory.as_mut() {
            *host_base = root.join(&*host_base);
        }
    }

    /// Build the context a session starts from. A missing project base
    /// directory falls back to the current directory.
    pub fn into_context(self) -> ProjectContext {
        let base_directory = self
            .project
            .base_directory
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let context = ProjectContext::new(base_directory.clone());
        context.set_name(self.project.name);
        context.set_build_file(self.project.build_file);
        context.set_default_target(self.project.default_target);
        if let Some(platform) = self.platform {
            context.set_platform(platform);
        }

        let mut host = HostInfo::new(self.host.base_directory.unwrap_or(base_directory));
        if let Some(assembly) = self.host.assembly {
            host.assembly = Arc::new(assembly);
        }
        host.probing_paths = self.host.probing_paths;
        context.set_host(host);

        for target in self.targets {
            context.add_target(target);
        }
        let properties = context.properties();
        for property in self.properties {
            let (name, entry) = property.into_entry();
            properties.insert(name, entry);
        }
        for task in self.tasks {
            context.add_task_builder(TaskBuilder::new(task.name, task.assembly));
        }
        context
    }
}


//==================================================
// End of file
//==================================================
