//! Configuration error types.
//!
//! Errors raised while locating, parsing and checking vehicle parameter
//! files and named presets.

use crate::common::ErrorSeverity;
use crate::validation::ValidationError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration not found: {0}")]
    NotFound(String),

    /// Named vehicle preset does not exist
    #[error("Unknown vehicle preset: {0}")]
    UnknownPreset(String),

    /// File extension is not a supported format
    #[error("Unsupported configuration format '{extension}' for {path}")]
    UnsupportedFormat {
        /// Path of the rejected file
        path: String,
        /// Extension that was not recognised
        extension: String,
    },

    /// Document could not be parsed
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// Source of the document (file path or `<inline>`)
        path: String,
        /// Parser message
        reason: String,
    },

    /// Parameters parsed but violate the configuration contract
    #[error("Invalid vehicle parameters: {0}")]
    Invalid(#[from] ValidationError),
}

impl ConfigError {
    /// Get the error severity.
    ///
    /// A contract violation is critical: a control session must never start
    /// with parameters that failed validation.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::Invalid(_) => ErrorSeverity::Critical,
            ConfigError::NotFound(_)
            | ConfigError::UnknownPreset(_)
            | ConfigError::UnsupportedFormat { .. }
            | ConfigError::Parse { .. } => ErrorSeverity::Error,
        }
    }

    /// Create a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        ConfigError::NotFound(path.into())
    }

    /// Create an unknown preset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        ConfigError::UnknownPreset(name.into())
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        ConfigError::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
