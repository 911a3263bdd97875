//! Error types for the logger

use std::path::Path;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Callback invoked with every file write failure swallowed during emission
pub type WriteErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with the operation and the path involved
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Timestamp pattern chrono cannot format
    #[error("Invalid timestamp pattern: '{pattern}'")]
    InvalidPattern { pattern: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Write attempted on a sink that was already closed
    #[error("Sink '{0}' is closed")]
    Closed(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidPattern {
            pattern: pattern.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn closed(sink: impl Into<String>) -> Self {
        LoggerError::Closed(sink.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_pattern("%Q");
        assert!(matches!(err, LoggerError::InvalidPattern { .. }));

        let err = LoggerError::config("LogLevel", "unknown label");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::closed("file");
        assert!(matches!(err, LoggerError::Closed(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_pattern("%Q");
        assert_eq!(err.to_string(), "Invalid timestamp pattern: '%Q'");

        let err = LoggerError::config("LogLevel", "unknown label 'LOUD'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LogLevel: unknown label 'LOUD'"
        );

        let err = LoggerError::closed("file");
        assert_eq!(err.to_string(), "Sink 'file' is closed");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("creating log directory", "/var/log/app", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("creating log directory"));
        assert!(err.to_string().contains("/var/log/app"));
        assert!(err.to_string().contains("access denied"));
    }
}
