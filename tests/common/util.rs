//==============================================
// File: tests/common/util.rs
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Shared fixtures for buildfuncs integration tests
// Objective: Build isolated project contexts and invoke calls tersely
//==============================================

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use buildfuncs::{CallError, Dispatcher, FunctionRegistry, ProjectContext, Value};
use parking_lot::Mutex;
use tracing::Level;

pub fn registry() -> &'static FunctionRegistry {
    FunctionRegistry::global().expect("built-in sets register cleanly")
}

pub fn context() -> ProjectContext {
    ProjectContext::new("/work/acme")
}

pub fn call(
    dispatcher: &mut Dispatcher<'_>,
    qualified: &str,
    args: &[&str],
) -> Result<Value, CallError> {
    let (namespace, function) = qualified
        .split_once("::")
        .unwrap_or_else(|| panic!("'{qualified}' is not namespace::function"));
    let args = args.iter().map(|arg| Value::from(*arg)).collect();
    dispatcher.call(namespace, function, args)
}

pub fn text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => panic!("expected string, got {other:?}"),
    }
}

pub fn flag(value: Value) -> bool {
    match value {
        Value::Boolean(flag) => flag,
        other => panic!("expected boolean, got {other:?}"),
    }
}

/// Runs `body` with a thread-local subscriber and returns the formatted
/// events it emitted at `level` or above.
pub fn capture_logs(level: Level, body: impl FnOnce()) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogSink(sink.clone()))
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    let bytes = buffer.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//==============================================
// End of file
//==============================================
