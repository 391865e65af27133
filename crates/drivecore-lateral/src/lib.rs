//! Lateral Control for DriveCore
//!
//! Two stages sit between the path planner and the steering actuator:
//!
//! - **Lag compensation**: corrects the planned curvature for actuator delay
//!   by linearizing the predicted heading error over the delay window, then
//!   bounds the result by the lateral jerk limit
//! - **Authorization**: decides whether the steering actuator may be
//!   commanded at all this tick (speed hysteresis, re-enable lockout, faults)
//!   and zeroes the bounded torque otherwise
//!
//! # Example
//!
//! ```
//! use drivecore_lateral::prelude::*;
//!
//! let compensator = LagCompensator::new(0.1)?;
//! let profile = CurvatureProfile::from_slices(&[0.0; CONTROL_N], &[0.0; CONTROL_N], &[0.0; CONTROL_N]);
//! let adjusted = compensator.compensate(20.0, &profile);
//! assert_eq!(adjusted.curvature, 0.0);
//! # Ok::<(), drivecore_errors::ValidationError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod authorization;
pub mod horizon;
pub mod lag;
pub mod prelude;

pub use authorization::{
    AuthorizationDecision, AuthorizationInputs, AuthorizationParams, AuthorizationState,
    DEFAULT_RELOCK_TICKS, LateralAuthorization, gated_steer_torque,
};
pub use horizon::{CONTROL_N, CurvatureProfile, T_IDXS, interp};
pub use lag::{
    DELAY_MARGIN_S, DT_MDL, LagAdjustedCurvature, LagCompensator, MAX_LATERAL_JERK, MIN_SPEED,
    lag_adjusted_curvature,
};
