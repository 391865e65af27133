//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use drivecore_filters::prelude::*;
//!
//! let mut previous: f64 = 0.0;
//! for _ in 0..3 {
//!     previous = rate_limit(-1.0, previous, -0.06, 0.06);
//! }
//! assert!((previous + 0.18).abs() < 1e-12);
//! ```

pub use crate::rate_limit::rate_limit;
pub use crate::steer_torque::{SteerTorqueLimits, SteerTorqueState, steer_torque_filter};
