//! Error types for lognest.
//!
//! The registry itself performs no validation and wraps nothing: anything a
//! caller sees here originates from the filesystem or the logging backend
//! and is surfaced as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lognest operations.
#[derive(Debug, Error)]
pub enum LognestError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Logger cache errors
    #[error("Logger cache error: {message}")]
    Cache { message: String },

    // Backend errors
    #[error("Backend error: {message}")]
    Backend { message: String },
}

/// Result type alias for lognest operations.
pub type Result<T> = std::result::Result<T, LognestError>;

impl From<std::io::Error> for LognestError {
    fn from(err: std::io::Error) -> Self {
        LognestError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl LognestError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LognestError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LognestError::Config {
            message: "bad directive".into(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad directive");
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LognestError::io_with_path(io, "/tmp/log4net.config");
        match err {
            LognestError::Io { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/log4net.config")));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
