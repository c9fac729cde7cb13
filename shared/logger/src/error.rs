//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur during logging.
#[derive(Debug)]
pub enum LoggingError {
    /// I/O error while opening or writing the log file.
    Io(io::Error),
    /// Unknown log level name.
    UnknownLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::UnknownLevel(name) => write!(f, "Unknown log level: '{}'", name),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            LoggingError::UnknownLevel(_) => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn test_unknown_level_display() {
        let err = LoggingError::UnknownLevel("trace".to_string());
        assert_eq!(err.to_string(), "Unknown log level: 'trace'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(ErrorKind::PermissionDenied, "read-only");
        let logging_err: LoggingError = io_err.into();

        assert!(matches!(logging_err, LoggingError::Io(_)));
        assert!(logging_err.source().is_some());
    }
}
