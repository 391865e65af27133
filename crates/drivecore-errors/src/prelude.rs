//! Prelude module for convenient error handling imports.
//!
//! This module re-exports the most commonly used types and traits for
//! error handling in DriveCore.
//!
//! # Example
//!
//! ```
//! use drivecore_errors::prelude::*;
//!
//! fn load(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(ValidationError::required("path").into());
//!     }
//!     Ok(path.to_string())
//! }
//!
//! assert!(load("ram_1500.yaml").is_ok());
//! ```

pub use crate::{
    Result,
    common::{DriveCoreError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    config::ConfigError,
    validation::ValidationError,
};

/// Macro for creating an error with context.
///
/// # Example
///
/// ```
/// use drivecore_errors::error_context;
///
/// let ctx = error_context!("load_vehicle", "file" => "ram_1500.yaml");
/// assert!(ctx.to_string().contains("ram_1500.yaml"));
/// ```
#[macro_export]
macro_rules! error_context {
    ($operation:expr, $($key:expr => $value:expr),* $(,)?) => {
        {
            let mut ctx = $crate::ErrorContext::new($operation);
            $(
                ctx = ctx.with($key, $value);
            )*
            ctx
        }
    };
}

/// Return early with the given error when the condition does not hold.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}

/// Return early with an out of range error unless `min <= value <= max`.
///
/// NaN is never in range.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if !($min..=$max).contains(&$value) {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}
