//! Platform-specific path utilities.
//!
//! These feed the configuration path resolution chain: where the running
//! binary lives, where the process was invoked from, and the fixed
//! last-resort location.

use crate::config::RegistryConfig;
use std::path::PathBuf;

/// Directory containing the running process binary.
///
/// Returns `None` when the executable location cannot be determined (for
/// example in heavily sandboxed environments).
pub fn entry_binary_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
}

/// Directory the process was invoked from.
///
/// When the registry is linked into a library consumed by another
/// application, the consumer's working directory is the closest portable
/// stand-in for the consumer's own location.
pub fn invoking_dir() -> Option<PathBuf> {
    std::env::current_dir().ok()
}

/// Last-resort configuration file location.
///
/// # Platform Behavior
/// - **Windows**: `c:\logs\log4net.config`
/// - **Linux/macOS**: `/var/log/log4net.config`
pub fn fallback_config_path() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from("c:\\logs").join(RegistryConfig::CONFIG_FILE_NAME)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/var/log").join(RegistryConfig::CONFIG_FILE_NAME)
    }
}
