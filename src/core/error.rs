//! Error types for the log facade

use super::log_priority::LogPriority;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No backend is attached to the facade
    #[error("Log backend unavailable")]
    BackendUnavailable,

    /// Priority that may only be used to configure a filter
    #[error("Priority {0} cannot be used for a log message")]
    InvalidPriority(LogPriority),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Malformed line in a property file
    #[error("Invalid property at line {line}: '{content}'")]
    PropertyParse { line: usize, content: String },

    /// File backend error with path
    #[error("File backend error for '{path}': {message}")]
    FileBackendError { path: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn property_parse(line: usize, content: impl Into<String>) -> Self {
        LoggerError::PropertyParse {
            line,
            content: content.into(),
        }
    }

    /// Create a file backend error
    pub fn file_backend(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileBackendError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
