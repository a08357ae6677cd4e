//! Process-wide logger registry with lazy configuration discovery.
//!
//! The registry owns one name → handle cache behind a single lock and
//! resolves the backend configuration file only on cache misses, in strict
//! priority order:
//!
//! 1. Explicit override recorded via `set_config_path` (first caller wins)
//! 2. Host application root, when a [`HostContext`] is registered
//! 3. Directory of the process binary
//! 4. Invoking directory, when step 3 yields no existing file
//! 5. Fixed platform fallback location
//!
//! Resolution never fails; a missing file only means the configuration step
//! is skipped and the backend keeps whatever is already active.

pub mod logger_registry;

pub use logger_registry::{HostContext, LoggerRegistry};
