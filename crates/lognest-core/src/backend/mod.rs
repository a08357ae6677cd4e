//! Logging backend abstraction.
//!
//! The registry delegates everything that touches log content to a backend:
//! parsing and applying configuration files, and producing named handles
//! that emit at the standard severities. The default implementation routes
//! emission through the `tracing` ecosystem; embedders can substitute their
//! own engine by implementing [`LogBackend`].

mod tracing;
mod traits;

pub use self::tracing::TracingBackend;
pub use traits::{Fields, LogBackend, LogHandle, Logger, Severity};
