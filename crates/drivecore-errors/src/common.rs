//! Common error types and utilities used across all DriveCore crates.
//!
//! This module provides the top-level error enum that wraps every sub-error,
//! along with error classification, severity levels and a context extension
//! trait.

use core::fmt;

use crate::{ConfigError, ValidationError};

/// Top-level error type that can wrap all DriveCore sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum DriveCoreError {
    /// Configuration loading or contract errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl DriveCoreError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DriveCoreError::Config(_) => ErrorCategory::Config,
            DriveCoreError::Validation(_) => ErrorCategory::Validation,
            DriveCoreError::Io(_) => ErrorCategory::IO,
            DriveCoreError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DriveCoreError::Config(e) => e.severity(),
            DriveCoreError::Validation(e) => e.severity(),
            DriveCoreError::Io(_) => ErrorSeverity::Error,
            DriveCoreError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        DriveCoreError::Other(msg.into())
    }
}

impl From<std::io::Error> for DriveCoreError {
    fn from(e: std::io::Error) -> Self {
        DriveCoreError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Configuration errors
    Config = 0,
    /// Validation errors
    Validation = 1,
    /// I/O errors
    IO = 2,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, the control session must not start
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Context information for errors.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, ctx: ErrorContext) -> Result<T, DriveCoreError>;

    /// Add context with an operation name.
    fn with_context(self, operation: impl Into<String>) -> Result<T, DriveCoreError>;
}

impl<T, E: Into<DriveCoreError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, DriveCoreError> {
        self.map_err(|e| {
            let err: DriveCoreError = e.into();
            DriveCoreError::Other(format!("{ctx}: {err}"))
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, DriveCoreError> {
        self.context(ErrorContext::new(operation))
    }
}
