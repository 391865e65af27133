//! Centralized error types for DriveCore
//!
//! Per-tick control operations in DriveCore are total: they never fail and
//! never return a `Result`. The types in this crate cover everything that
//! happens around the tick, chiefly loading and validating the static
//! per-vehicle configuration when a control session is created.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error type, classification and context helpers
//! - [`config`]: Configuration loading and preset lookup errors
//! - [`validation`]: Field-level validation errors
//!
//! # Example
//!
//! ```
//! use drivecore_errors::prelude::*;
//!
//! fn check_mass(mass_kg: f64) -> Result<f64> {
//!     if !(500.0..=10_000.0).contains(&mass_kg) {
//!         return Err(ValidationError::out_of_range("mass_kg", mass_kg, 500.0, 10_000.0).into());
//!     }
//!     Ok(mass_kg)
//! }
//!
//! assert!(check_mass(2_000.0).is_ok());
//! assert!(check_mass(f64::NAN).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod prelude;
pub mod validation;

pub use common::{DriveCoreError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt};
pub use config::ConfigError;
pub use validation::ValidationError;

/// A specialized `Result` type for DriveCore operations.
pub type Result<T> = std::result::Result<T, DriveCoreError>;
