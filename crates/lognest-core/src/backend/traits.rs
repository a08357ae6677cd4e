//! Backend trait and handle types.

use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// Standard log severities understood by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional structured context attached to a single emission.
pub type Fields = serde_json::Map<String, Value>;

/// Capability interface for a named logging handle.
///
/// Handles are created by the backend and shared freely across threads;
/// internal thread safety is part of the backend's contract.
pub trait LogHandle: Send + Sync {
    /// Name the handle was obtained under.
    fn name(&self) -> &str;

    /// Whether messages at `severity` are currently emitted.
    fn enabled(&self, severity: Severity) -> bool;

    /// Emit one message, with optional structured context.
    fn emit(&self, severity: Severity, message: &str, fields: Option<&Fields>);
}

/// External logging engine the registry delegates to.
///
/// The registry never parses configuration content itself; it only decides
/// when a file should be handed to `apply_config`.
pub trait LogBackend: Send + Sync {
    /// (Re)apply the configuration file at `path`.
    ///
    /// Called on the first request for every new logger name, so
    /// implementations must be safe to re-apply.
    fn apply_config(&self, path: &Path) -> Result<()>;

    /// Obtain a handle for `name`.
    fn handle(&self, name: &str) -> Arc<dyn LogHandle>;
}

/// A named logger served by the registry.
///
/// Cheap to clone; clones share the same underlying handle.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<dyn LogHandle>,
}

impl Logger {
    pub(crate) fn new(inner: Arc<dyn LogHandle>) -> Self {
        Self { inner }
    }

    /// Name this logger was registered under.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Whether messages at `severity` are currently emitted.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.inner.enabled(severity)
    }

    /// Emit at an explicit severity, with optional structured context.
    pub fn log(&self, severity: Severity, message: &str, fields: Option<&Fields>) {
        self.inner.emit(severity, message, fields);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message, None);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message, None);
    }

    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message, None);
    }

    /// True when both loggers share the same underlying handle.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullHandle {
        name: String,
    }

    impl LogHandle for NullHandle {
        fn name(&self) -> &str {
            &self.name
        }

        fn enabled(&self, _severity: Severity) -> bool {
            true
        }

        fn emit(&self, _severity: Severity, _message: &str, _fields: Option<&Fields>) {}
    }

    #[test]
    fn test_severity_roundtrip() {
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(severity.to_string(), severity.as_str());
        }
    }

    #[test]
    fn test_logger_clones_share_handle() {
        let logger = Logger::new(Arc::new(NullHandle {
            name: "Worker".into(),
        }));
        let clone = logger.clone();
        assert!(logger.ptr_eq(&clone));
        assert_eq!(clone.name(), "Worker");
    }

    #[test]
    fn test_separate_handles_are_not_identical() {
        let a = Logger::new(Arc::new(NullHandle { name: "A".into() }));
        let b = Logger::new(Arc::new(NullHandle { name: "A".into() }));
        assert!(!a.ptr_eq(&b));
    }
}
