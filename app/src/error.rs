//! Error types for the book layout.

use thiserror::Error;

/// Result type alias using `LayoutError`.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while loading or validating layout configuration.
///
/// Rendering itself never fails; these only surface at composition time.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Layered configuration error (file plus environment).
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl LayoutError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_config_error() {
        let err = LayoutError::config("title cannot be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("title cannot be empty"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = LayoutError::config_with_source("failed to parse book.toml", io_err);
        assert!(err.to_string().contains("failed to parse book.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LayoutError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
