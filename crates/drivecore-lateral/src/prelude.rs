//! Prelude for the lateral crate.

pub use crate::authorization::{
    AuthorizationDecision, AuthorizationInputs, AuthorizationParams, LateralAuthorization,
    gated_steer_torque,
};
pub use crate::horizon::{CONTROL_N, CurvatureProfile};
pub use crate::lag::{LagAdjustedCurvature, LagCompensator, lag_adjusted_curvature};
