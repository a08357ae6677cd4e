//! Lognest - process-wide registry of named logger handles.
//!
//! Applications that log from many independently-named subsystems should not
//! pay configuration discovery on every call site. Lognest keeps one
//! process-wide cache of name → handle: the first request for a name locates
//! the logging configuration file (explicit override, host application root,
//! binary directory, invoking directory, fixed fallback - in that order),
//! hands it to the backend when the file exists, and caches the handle.
//! Every later request for the same name returns the same handle without
//! touching the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use lognest::Severity;
//!
//! // Optional; without it the registry discovers the file on its own.
//! lognest::set_config_path("/etc/myapp/log4net.config");
//!
//! let worker = lognest::logger("Worker")?;
//! worker.info("worker started");
//!
//! let default = lognest::default_logger()?;
//! default.log(Severity::Warn, "no subsystem name", None);
//! # Ok::<(), lognest::LognestError>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod platform;
pub mod registry;

// Re-export commonly used types
pub use backend::{Fields, LogBackend, LogHandle, Logger, Severity, TracingBackend};
pub use config::RegistryConfig;
pub use error::{LognestError, Result};
pub use registry::{HostContext, LoggerRegistry};

use std::path::PathBuf;
use std::sync::Arc;

/// The process-wide logger registry.
pub fn cache() -> &'static LoggerRegistry {
    LoggerRegistry::cache()
}

/// Get the logger registered under `name` from the process-wide registry.
pub fn logger(name: &str) -> Result<Logger> {
    LoggerRegistry::cache().get(name)
}

/// Get the default logger from the process-wide registry.
pub fn default_logger() -> Result<Logger> {
    LoggerRegistry::cache().default_logger()
}

/// Set the configuration file path for the process-wide registry.
///
/// The first caller wins; later calls are silently ignored.
pub fn set_config_path(path: impl Into<PathBuf>) {
    LoggerRegistry::cache().set_config_path(path);
}

/// Register the hosting environment for the process-wide registry.
pub fn set_host_context(host: Arc<dyn HostContext>) {
    LoggerRegistry::cache().set_host_context(host);
}
