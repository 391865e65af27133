//! Tracing error types

use core::fmt;

/// Tracing errors
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Provider initialization failed
    #[error("Trace provider initialization failed: {0}")]
    InitializationFailed(String),

    /// Provider used before initialization
    #[error("Trace provider not initialized")]
    NotInitialized,

    /// Invalid configuration
    #[error("Invalid tracing configuration: {0}")]
    InvalidConfiguration(String),
}

impl TraceError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TraceError::InitializationFailed(_) => false,
            TraceError::NotInitialized => true,
            TraceError::InvalidConfiguration(_) => false,
        }
    }

    /// Create an initialization error with context
    pub fn init_failed(context: impl fmt::Display) -> Self {
        TraceError::InitializationFailed(context.to_string())
    }
}
