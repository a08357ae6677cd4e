//! Process-wide cache of named logger handles.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, RwLock};

use tracing::debug;

use crate::backend::{LogBackend, Logger, TracingBackend};
use crate::config::RegistryConfig;
use crate::error::{LognestError, Result};
use crate::platform;

/// Hosting environment that may supply a physical application root.
///
/// When registered, the root directory takes priority over binary-location
/// probing during configuration path resolution.
pub trait HostContext: Send + Sync {
    /// Physical root directory of the hosting application, if known.
    fn application_root(&self) -> Option<PathBuf>;
}

/// Process-wide registry of named logger handles.
///
/// Lookup and lazy initialization for a name run inside one critical section
/// under a single lock acquisition: registry calls serialize against each
/// other but never self-deadlock. Actual log emission goes through the
/// already-obtained [`Logger`] and takes no registry lock at all.
///
/// On the first request for each new name the registry resolves the
/// configuration file path and, when that file exists, asks the backend to
/// (re)apply it before the handle is created. Already-cached names never
/// trigger configuration again.
pub struct LoggerRegistry {
    backend: Arc<dyn LogBackend>,
    loggers: Mutex<HashMap<String, Logger>>,
    override_path: OnceLock<PathBuf>,
    host: RwLock<Option<Arc<dyn HostContext>>>,
}

static CACHE: OnceLock<LoggerRegistry> = OnceLock::new();

impl LoggerRegistry {
    /// Build a registry owning its own cache, served by `backend`.
    pub fn new(backend: Arc<dyn LogBackend>) -> Self {
        Self {
            backend,
            loggers: Mutex::new(HashMap::new()),
            override_path: OnceLock::new(),
            host: RwLock::new(None),
        }
    }

    /// The process-wide registry.
    ///
    /// Lazily initialized with the default tracing backend on first access;
    /// lives until process exit.
    pub fn cache() -> &'static LoggerRegistry {
        CACHE.get_or_init(|| LoggerRegistry::new(Arc::new(TracingBackend::install())))
    }

    /// Get the logger registered under `name`, creating it if missing.
    ///
    /// The empty string is a legal, if unusual, name. A missing
    /// configuration file is not an error: the backend keeps whatever
    /// configuration is already active and a handle is returned regardless.
    /// Backend failures propagate unmodified and leave `name` uncached, so
    /// the next request retries.
    pub fn get(&self, name: &str) -> Result<Logger> {
        let mut loggers = self.lock_loggers()?;

        if let Some(logger) = loggers.get(name) {
            return Ok(logger.clone());
        }

        let config_path = self.resolve_config_path();
        if config_path.is_file() {
            self.backend.apply_config(&config_path)?;
            debug!(path = %config_path.display(), "applied logging configuration");
        }

        let logger = Logger::new(self.backend.handle(name));
        loggers.insert(name.to_owned(), logger.clone());
        debug!(name, "cached new logger handle");

        Ok(logger)
    }

    /// The logger registered under [`RegistryConfig::DEFAULT_LOGGER_NAME`].
    pub fn default_logger(&self) -> Result<Logger> {
        self.get(RegistryConfig::DEFAULT_LOGGER_NAME)
    }

    /// Record `path` as the configuration file location.
    ///
    /// The first caller wins; later calls are silently ignored. The path is
    /// not checked for existence.
    pub fn set_config_path(&self, path: impl Into<PathBuf>) {
        let _ = self.override_path.set(path.into());
    }

    /// Register the hosting environment consulted during resolution.
    pub fn set_host_context(&self, host: Arc<dyn HostContext>) {
        if let Ok(mut slot) = self.host.write() {
            *slot = Some(host);
        }
    }

    fn application_root(&self) -> Option<PathBuf> {
        self.host
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().and_then(|host| host.application_root()))
    }

    /// Resolve the configuration file path for a cache miss.
    ///
    /// Priority order: explicit override, host application root, process
    /// binary directory, invoking directory (only when the binary-directory
    /// candidate is not an existing file), and finally the fixed platform
    /// fallback. Always yields some path; file existence decides whether
    /// configuration is applied, not what is computed.
    fn resolve_config_path(&self) -> PathBuf {
        if let Some(path) = self.override_path.get() {
            return path.clone();
        }

        if let Some(root) = self.application_root() {
            return root.join(RegistryConfig::CONFIG_FILE_NAME);
        }

        let mut resolved = platform::entry_binary_dir()
            .map(|dir| dir.join(RegistryConfig::CONFIG_FILE_NAME))
            .unwrap_or_default();

        if !resolved.is_file() {
            if let Some(dir) = platform::invoking_dir() {
                resolved = dir.join(RegistryConfig::CONFIG_FILE_NAME);
            }
        }

        if is_blank(&resolved) {
            platform::fallback_config_path()
        } else {
            resolved
        }
    }

    fn lock_loggers(&self) -> Result<MutexGuard<'_, HashMap<String, Logger>>> {
        self.loggers.lock().map_err(|_| LognestError::Cache {
            message: "Failed to acquire logger cache lock".to_string(),
        })
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
