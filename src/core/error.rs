//! Error types for the logger system
//!
//! Sink failures are not represented here: they are returned as the
//! sink's own `std::io::Error`, untouched.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    /// Level name not present in the severity name table
    #[error("Invalid log level name: '{name}'")]
    InvalidLevelName { name: String },

    /// Invalid configuration value with details
    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfiguration { key: String, message: String },
}

impl LoggerError {
    /// Create an invalid level name error
    pub fn invalid_level_name(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevelName { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            key: key.into(),
            message: message.into(),
        }
    }
}
