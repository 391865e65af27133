//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use drivecore_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_some};
pub use crate::script::ButtonScript;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
