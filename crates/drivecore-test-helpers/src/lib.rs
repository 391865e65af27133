//! Shared test utilities for DriveCore.
//!
//! This crate provides common test helpers, assertions, and scripted
//! driver inputs to reduce code duplication across the test suite.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Custom assertion macros for control outputs
//! - [`script`] - Frame-by-frame button press scripts
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! drivecore-test-helpers = { path = "crates/drivecore-test-helpers" }
//! ```
//!
//! Then import the prelude:
//!
//! ```rust,ignore
//! use drivecore_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test helpers report failures by panicking"
)]

pub mod assertions;
pub mod must;
pub mod prelude;
pub mod script;

pub use must::*;
pub use script::ButtonScript;
