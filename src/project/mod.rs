//==================================================
// File: project/mod.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Live build state seen by built-in functions
// Objective: Shared, engine-mutated project context with read accessors
//==================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::platform::HostPlatform;

mod properties;
mod targets;
mod tasks;

pub use properties::{PropertyEntry, PropertyView};
pub use targets::Target;
pub use tasks::{AssemblyInfo, TaskBuilder};

//==================================================
// Section 1.0 - Host Information
//==================================================

/// Facts about the process hosting the build rather than the build itself.
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub base_directory: PathBuf,
    pub assembly: Arc<AssemblyInfo>,
    pub probing_paths: Vec<PathBuf>,
}

impl HostInfo {
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            assembly: Arc::new(AssemblyInfo::host_default()),
            probing_paths: Vec::new(),
        }
    }
}

//==================================================
// Section 2.0 - Project Context
//==================================================

#[derive(Debug)]
struct ProjectState {
    name: String,
    build_file: Option<PathBuf>,
    default_target: String,
    base_directory: PathBuf,
    targets: BTreeMap<String, Target>,
    executing: Vec<String>,
    tasks: BTreeMap<String, TaskBuilder>,
    platform: HostPlatform,
    host: HostInfo,
}

/// Handle onto the state of one build run.
///
/// The build engine mutates the context through the `set_*`/`add_*` methods
/// and the target lifecycle calls; function sets only read it. Clones share
/// state, so readers always observe the current values.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    state: Arc<RwLock<ProjectState>>,
    properties: PropertyView,
}

impl ProjectContext {
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        let base_directory = base_directory.into();
        let host = HostInfo::new(base_directory.clone());
        Self {
            state: Arc::new(RwLock::new(ProjectState {
                name: String::new(),
                build_file: None,
                default_target: String::new(),
                base_directory,
                targets: BTreeMap::new(),
                executing: Vec::new(),
                tasks: BTreeMap::new(),
                platform: HostPlatform::current(),
                host,
            })),
            properties: PropertyView::new(),
        }
    }

    pub fn properties(&self) -> PropertyView {
        self.properties.clone()
    }

    // Engine-side mutation.

    pub fn set_name(&self, name: impl Into<String>) {
        self.state.write().name = name.into();
    }

    pub fn set_build_file(&self, build_file: Option<PathBuf>) {
        self.state.write().build_file = build_file;
    }

    pub fn set_default_target(&self, target: impl Into<String>) {
        self.state.write().default_target = target.into();
    }

    pub fn set_base_directory(&self, base_directory: impl Into<PathBuf>) {
        self.state.write().base_directory = base_directory.into();
    }

    pub fn set_platform(&self, platform: HostPlatform) {
        self.state.write().platform = platform;
    }

    pub fn set_host(&self, host: HostInfo) {
        self.state.write().host = host;
    }

    pub fn set_probing_paths(&self, probing_paths: Vec<PathBuf>) {
        self.state.write().host.probing_paths = probing_paths;
    }

    pub fn add_target(&self, target: Target) {
        self.state.write().targets.insert(target.name.clone(), target);
    }

    pub fn add_task_builder(&self, builder: TaskBuilder) {
        self.state.write().tasks.insert(builder.name.clone(), builder);
    }

    /// Marks `name` as the executing target. Nested calls stack.
    pub fn begin_target(&self, name: impl Into<String>) {
        self.state.write().executing.push(name.into());
    }

    /// Finishes the innermost executing target and flags it as executed.
    pub fn end_target(&self) -> Option<String> {
        let mut state = self.state.write();
        let finished = state.executing.pop()?;
        if let Some(target) = state.targets.get_mut(&finished) {
            target.executed = true;
        }
        Some(finished)
    }

    // Function-side reads.

    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    pub fn build_file(&self) -> Option<PathBuf> {
        self.state.read().build_file.clone()
    }

    pub fn default_target(&self) -> String {
        self.state.read().default_target.clone()
    }

    pub fn base_directory(&self) -> PathBuf {
        self.state.read().base_directory.clone()
    }

    pub fn platform(&self) -> HostPlatform {
        self.state.read().platform
    }

    pub fn current_target(&self) -> Option<String> {
        self.state.read().executing.last().cloned()
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.state.read().targets.contains_key(name)
    }

    pub fn target(&self, name: &str) -> Option<Target> {
        self.state.read().targets.get(name).cloned()
    }

    pub fn has_task(&self, name: &str) -> bool {
        self.state.read().tasks.contains_key(name)
    }

    pub fn task_builder(&self, name: &str) -> Option<TaskBuilder> {
        self.state.read().tasks.get(name).cloned()
    }

    pub fn host_base_directory(&self) -> PathBuf {
        self.state.read().host.base_directory.clone()
    }

    pub fn host_assembly(&self) -> Arc<AssemblyInfo> {
        self.state.read().host.assembly.clone()
    }

    pub fn probing_paths(&self) -> Vec<PathBuf> {
        self.state.read().host.probing_paths.clone()
    }

    /// Resolve `path` against the project base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_directory().join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lifecycle_tracks_current_and_executed() {
        let context = ProjectContext::new("/work");
        context.add_target(Target::new("build"));
        context.add_target(Target::new("compile"));
        assert_eq!(context.current_target(), None);

        context.begin_target("build");
        context.begin_target("compile");
        assert_eq!(context.current_target().as_deref(), Some("compile"));

        assert_eq!(context.end_target().as_deref(), Some("compile"));
        assert_eq!(context.current_target().as_deref(), Some("build"));
        assert!(context.target("compile").map(|t| t.executed).unwrap_or(false));
        assert!(!context.target("build").map(|t| t.executed).unwrap_or(true));

        context.end_target();
        assert_eq!(context.current_target(), None);
        assert_eq!(context.end_target(), None);
    }

    #[test]
    fn clones_observe_engine_updates() {
        let context = ProjectContext::new("/work");
        let reader = context.clone();
        context.set_name("Acme");
        context.properties().set("debug", "true");
        assert_eq!(reader.name(), "Acme");
        assert!(reader.properties().contains("debug"));
    }

    #[test]
    fn relative_paths_resolve_against_base_directory() {
        let context = ProjectContext::new("/work");
        assert_eq!(
            context.resolve_path(Path::new("lib")),
            PathBuf::from("/work/lib")
        );
    }
}

//==================================================
// End of file
//==================================================
