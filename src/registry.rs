//==================================================
// File: registry.rs
//==================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Process-wide catalog of built-in function sets
// Objective: Register sets once per namespace and resolve calls by
//            (namespace, name, arity)
//==================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::debug;

use crate::descriptor::{FunctionDescriptor, FunctionKey};
use crate::error::{RegistrationError, ResolveError};
use crate::function_set::{FunctionEntry, FunctionSet, FunctionSetDecl};
use crate::functions;

static GLOBAL: OnceCell<FunctionRegistry> = OnceCell::new();

//==================================================
// Section 1.0 - Registry
//==================================================

#[derive(Debug, Default)]
pub struct FunctionRegistry {
    sets: BTreeMap<String, Arc<FunctionSet>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in function set.
    pub fn with_builtins() -> Result<Self, RegistrationError> {
        let mut registry = Self::new();
        functions::register_builtins(&mut registry)?;
        Ok(registry)
    }

    /// Shared built-in registry, created on first use.
    pub fn global() -> Result<&'static FunctionRegistry, RegistrationError> {
        GLOBAL.get_or_try_init(Self::with_builtins)
    }

    /// Adds a function set. Nothing is stored when validation fails.
    pub fn register(&mut self, decl: FunctionSetDecl) -> Result<(), RegistrationError> {
        let (namespace, functions) = decl.into_parts();
        if !is_valid_namespace(&namespace) {
            return Err(RegistrationError::InvalidNamespace(namespace));
        }
        if self.sets.contains_key(&namespace) {
            return Err(RegistrationError::DuplicateNamespace(namespace));
        }

        let mut entries: BTreeMap<FunctionKey, FunctionEntry> = BTreeMap::new();
        for entry in functions {
            match entries.entry(entry.descriptor.key()) {
                Entry::Occupied(existing) => {
                    return Err(RegistrationError::DuplicateSignature {
                        namespace,
                        name: existing.key().name.clone(),
                        arity: existing.key().arity,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }

        debug!(namespace = %namespace, functions = entries.len(), "registered function set");
        let set = FunctionSet::new(namespace.clone(), entries);
        self.sets.insert(namespace, Arc::new(set));
        Ok(())
    }

    pub fn function_set(&self, namespace: &str) -> Result<&Arc<FunctionSet>, ResolveError> {
        self.sets
            .get(namespace)
            .ok_or_else(|| ResolveError::UnknownNamespace(namespace.to_string()))
    }

    /// Finds the function called `name` taking `arity` arguments.
    ///
    /// A known name with a different arity is reported exactly like an
    /// unknown name.
    pub fn resolve(
        &self,
        namespace: &str,
        name: &str,
        arity: usize,
    ) -> Result<&FunctionEntry, ResolveError> {
        self.function_set(namespace)?
            .get(name, arity)
            .ok_or_else(|| ResolveError::UnknownFunction {
                namespace: namespace.to_string(),
                name: name.to_string(),
                arity,
            })
    }

    pub fn contains(&self, namespace: &str, name: &str, arity: usize) -> bool {
        self.resolve(namespace, name, arity).is_ok()
    }

    /// Registered namespaces in sorted order. The iterator can be cloned to
    /// restart it.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> + Clone {
        self.sets.keys().map(String::as_str)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &FunctionDescriptor> + Clone {
        self.sets.values().flat_map(|set| set.descriptors())
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog {
            namespaces: self
                .sets
                .values()
                .map(|set| NamespaceCatalog {
                    namespace: set.namespace(),
                    functions: set.descriptors().collect(),
                })
                .collect(),
        }
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    let mut chars = namespace.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

//==================================================
// Section 2.0 - Introspection
//==================================================

/// Help-generation view of the registry.
#[derive(Debug, Serialize)]
pub struct Catalog<'a> {
    pub namespaces: Vec<NamespaceCatalog<'a>>,
}

#[derive(Debug, Serialize)]
pub struct NamespaceCatalog<'a> {
    pub namespace: &'a str,
    pub functions: Vec<&'a FunctionDescriptor>,
}

impl Catalog<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}


//==================================================
// End of file
//==================================================
