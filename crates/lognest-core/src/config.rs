//! Centralized configuration constants for lognest.

/// Registry-level configuration.
pub struct RegistryConfig;

impl RegistryConfig {
    /// Fixed configuration file name, appended to whichever base directory
    /// path resolution selects.
    pub const CONFIG_FILE_NAME: &'static str = "log4net.config";

    /// Name served by `default_logger`.
    pub const DEFAULT_LOGGER_NAME: &'static str = "Default";

    /// Filter directives active before any configuration file is applied.
    pub const DEFAULT_FILTER: &'static str = "info";
}
