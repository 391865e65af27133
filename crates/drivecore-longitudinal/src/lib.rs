//! Longitudinal Actuator Shaping for DriveCore
//!
//! Converts a desired acceleration into exactly one actuator command per
//! tick: a ramp-limited brake target when braking or coasting, or a traction
//! torque request when propelling.
//!
//! # Overview
//!
//! - **Brake ramp**: soft-starts at half the request, then moves toward the
//!   target by a damped step bounded by [`BRAKE_CHANGE`]
//! - **Torque request**: estimates the engine torque increment for the
//!   desired acceleration over a one second horizon
//! - **Shaper**: clips the request, picks the mode from its sign and owns the
//!   ramp state across ticks
//!
//! # Example
//!
//! ```
//! use drivecore_longitudinal::prelude::*;
//!
//! let mut shaper = LongitudinalShaper::new(LongitudinalParams::default(), 2_000.0);
//! let command = shaper.update(&LongitudinalInputs {
//!     enabled: true,
//!     desired_accel: -1.0,
//!     ..LongitudinalInputs::default()
//! });
//! assert_eq!(command.brake_target(), Some(-0.5));
//! assert_eq!(command.torque_target(), None);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod brake;
pub mod prelude;
pub mod shaper;
pub mod torque;

pub use brake::{BRAKE_CHANGE, BRAKE_RELEASE_DEADBAND, LongitudinalShaperState, brake_ramp};
pub use shaper::{
    ACCEL_MAX, ACCEL_MIN, LongitudinalCommand, LongitudinalInputs, LongitudinalParams,
    LongitudinalShaper,
};
pub use torque::{TORQUE_SCALE, torque_request};
