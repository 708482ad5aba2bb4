//! Python interpreter discovery.

use std::path::PathBuf;

use crate::util::diagnostic::suggestions;

/// Interpreter name written to the Makefile when nothing is found on PATH.
pub const FALLBACK_INTERPRETER: &str = "python3";

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Find a Python interpreter.
///
/// Checks the `PYTHON` environment variable first, then `python3` and
/// `python` on PATH.
pub fn find_python() -> Option<PathBuf> {
    if let Ok(python) = std::env::var("PYTHON") {
        if let Some(path) = find_executable(&python) {
            return Some(path);
        }
    }

    for name in &["python3", "python"] {
        if let Some(path) = find_executable(name) {
            return Some(path);
        }
    }

    None
}

/// Pick the interpreter: explicit choice, then discovery, then the fallback name.
pub fn resolve_interpreter(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(find_python)
        .unwrap_or_else(|| {
            tracing::warn!(
                "no Python interpreter found on PATH, using `{}`\n{}",
                FALLBACK_INTERPRETER,
                suggestions::NO_INTERPRETER
            );
            PathBuf::from(FALLBACK_INTERPRETER)
        })
}
