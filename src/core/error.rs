//! Error types for the logging engine
//!
//! Logging itself is fire-and-forget and never returns an error to the
//! caller; these types cover the seams that can fail internally
//! (destination I/O, encoding, mask round-trips).

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Destination error with path
    #[error("Destination error for '{path}': {message}")]
    Destination { path: String, message: String },

    /// Mask token could not be reversed
    #[error("Unmask failed: {0}")]
    Unmask(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LogError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LogError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a destination error
    pub fn destination(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Destination {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unmask error
    pub fn unmask(msg: impl Into<String>) -> Self {
        LogError::Unmask(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LogError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::config("level", "must not be empty");
        assert!(matches!(err, LogError::InvalidConfiguration { .. }));

        let err = LogError::destination("/var/log/app.log", "permission denied");
        assert!(matches!(err, LogError::Destination { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::destination("/var/log/app.log", "permission denied");
        assert_eq!(
            err.to_string(),
            "Destination error for '/var/log/app.log': permission denied"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LogError::io_operation("writing log file", io_err);
        assert!(err.to_string().contains("writing log file"));
    }
}
