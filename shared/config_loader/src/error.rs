use std::fmt;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating or reading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found
    FileNotFound(String),

    /// The file exists but could not be read
    ReadError(String),

    /// A non-comment line is not of the form `key=value`
    InvalidLine { line: usize, content: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::InvalidLine { line, content } => {
                write!(f, "Invalid configuration line {}: '{}'", line, content)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
