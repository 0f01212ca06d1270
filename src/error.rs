use serde::Serialize;
use thiserror::Error;

use crate::value::{Value, render_arguments};

/// Failure categories visible to script authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    UnknownNamespace,
    UnknownFunction,
    ArgumentTypeMismatch,
    InvalidState,
    UnknownTarget,
    UnknownTask,
    UnknownProperty,
    FileNotFound,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnknownNamespace => "unknown-namespace",
            ErrorKind::UnknownFunction => "unknown-function",
            ErrorKind::ArgumentTypeMismatch => "argument-type-mismatch",
            ErrorKind::InvalidState => "invalid-state",
            ErrorKind::UnknownTarget => "unknown-target",
            ErrorKind::UnknownTask => "unknown-task",
            ErrorKind::UnknownProperty => "unknown-property",
            ErrorKind::FileNotFound => "file-not-found",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type FunctionResult<T> = Result<T, FunctionError>;

/// Failure raised inside a function implementation or while coercing its
/// arguments. Never crosses the dispatcher boundary as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("argument {index} expects {expected}, got {actual} {value}")]
    ArgumentTypeMismatch {
        index: usize,
        expected: String,
        actual: String,
        value: String,
    },
    #[error("{0}")]
    InvalidState(String),
    #[error("target '{0}' does not exist")]
    UnknownTarget(String),
    #[error("task '{0}' does not exist")]
    UnknownTask(String),
    #[error("property '{0}' has not been set")]
    UnknownProperty(String),
    #[error("file '{file}' could not be found in {searched} probing location(s)")]
    FileNotFound { file: String, searched: usize },
}

impl FunctionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FunctionError::ArgumentTypeMismatch { .. } => ErrorKind::ArgumentTypeMismatch,
            FunctionError::InvalidState(_) => ErrorKind::InvalidState,
            FunctionError::UnknownTarget(_) => ErrorKind::UnknownTarget,
            FunctionError::UnknownTask(_) => ErrorKind::UnknownTask,
            FunctionError::UnknownProperty(_) => ErrorKind::UnknownProperty,
            FunctionError::FileNotFound { .. } => ErrorKind::FileNotFound,
        }
    }

    pub(crate) fn mismatch(index: usize, expected: &str, value: &Value) -> Self {
        FunctionError::ArgumentTypeMismatch {
            index,
            expected: expected.to_string(),
            actual: value.type_name().to_string(),
            value: value.render(),
        }
    }
}

/// Lookup failure reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown namespace '{0}'")]
    UnknownNamespace(String),
    #[error("unknown function '{namespace}::{name}/{arity}'")]
    UnknownFunction {
        namespace: String,
        name: String,
        arity: usize,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::UnknownNamespace(_) => ErrorKind::UnknownNamespace,
            ResolveError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
        }
    }
}

/// Rejected function set registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("namespace '{0}' is already registered")]
    DuplicateNamespace(String),
    #[error("function '{namespace}::{name}' is declared twice with {arity} parameter(s)")]
    DuplicateSignature {
        namespace: String,
        name: String,
        arity: usize,
    },
    #[error("'{0}' is not a valid namespace identifier")]
    InvalidNamespace(String),
}

/// The single failure shape handed back to the expression evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallError {
    pub namespace: String,
    pub function: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl CallError {
    pub(crate) fn from_resolve(
        error: ResolveError,
        namespace: &str,
        function: &str,
        args: &[Value],
    ) -> Self {
        Self {
            namespace: namespace.to_string(),
            function: function.to_string(),
            kind: error.kind(),
            message: format!(
                "{namespace}::{function}({}) failed: {error}",
                render_arguments(args)
            ),
        }
    }

    pub(crate) fn from_function(
        error: FunctionError,
        namespace: &str,
        function: &str,
        args: &[Value],
    ) -> Self {
        Self {
            namespace: namespace.to_string(),
            function: function.to_string(),
            kind: error.kind(),
            message: format!(
                "{namespace}::{function}({}) failed: {error}",
                render_arguments(args)
            ),
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.function)
    }

    pub fn code_str(&self) -> &'static str {
        self.kind.as_str()
    }
}
