//! Prelude for the longitudinal crate.

pub use crate::brake::{BRAKE_CHANGE, LongitudinalShaperState, brake_ramp};
pub use crate::shaper::{
    LongitudinalCommand, LongitudinalInputs, LongitudinalParams, LongitudinalShaper,
};
pub use crate::torque::torque_request;
