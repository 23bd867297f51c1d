//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
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

    /// Write attempted on a sink that has been closed
    #[error("Sink '{sink}' is closed")]
    SinkClosed { sink: String },

    /// Unknown name in a format flag list
    #[error("Invalid format flag: '{token}'")]
    InvalidFlags { token: String },

    /// Unknown severity name or discriminant
    #[error("Invalid severity: '{value}'")]
    InvalidSeverity { value: String },

    /// The `log` facade already has a logger installed
    #[error("Failed to install log bridge: {0}")]
    BridgeInstall(String),
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

    pub fn sink_closed(sink: impl Into<String>) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }

    pub fn invalid_flags(token: impl Into<String>) -> Self {
        LoggerError::InvalidFlags {
            token: token.into(),
        }
    }

    pub fn invalid_severity(value: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink_closed("memory");
        assert!(matches!(err, LoggerError::SinkClosed { .. }));

        let err = LoggerError::invalid_flags("hour");
        assert!(matches!(err, LoggerError::InvalidFlags { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink_closed("file");
        assert_eq!(err.to_string(), "Sink 'file' is closed");

        let err = LoggerError::invalid_flags("hour");
        assert_eq!(err.to_string(), "Invalid format flag: 'hour'");

        let err = LoggerError::invalid_severity("7");
        assert_eq!(err.to_string(), "Invalid severity: '7'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
