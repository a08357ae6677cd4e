//! Platform abstraction layer for cross-platform compatibility.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than scattered throughout the codebase.

pub mod paths;

pub use paths::{entry_binary_dir, fallback_config_path, invoking_dir};
