//! Error types for the logger bridge

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Manager could not supply a delegate for a logger name
    #[error("Delegate lookup failed for '{name}': {message}")]
    DelegateLookup { name: String, message: String },

    /// Delegate logger failed while checking or emitting
    #[error("Delegate error: {0}")]
    Delegate(String),

    /// Formatter error with the offending pattern
    #[error("Formatter error for pattern '{pattern}': {message}")]
    Formatter { pattern: String, message: String },

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

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a delegate lookup error
    pub fn lookup(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::DelegateLookup {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a delegate error
    pub fn delegate<S: Into<String>>(msg: S) -> Self {
        LoggerError::Delegate(msg.into())
    }

    /// Create a formatter error
    pub fn formatter(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

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

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
