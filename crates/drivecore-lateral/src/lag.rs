//! Curvature lag compensation.

use drivecore_errors::{ValidationError, validate};

use crate::horizon::CurvatureProfile;

/// Speed floor, m/s.
pub const MIN_SPEED: f64 = 1.0;
/// Lateral jerk bound, m/s³.
pub const MAX_LATERAL_JERK: f64 = 5.0;
/// Model tick duration, seconds.
pub const DT_MDL: f64 = 0.05;
/// Margin added to the actuator delay for the remaining pipeline delays.
pub const DELAY_MARGIN_S: f64 = 0.2;
/// Largest accepted actuator delay, seconds.
const MAX_ACTUATOR_DELAY_S: f64 = 2.0;

/// Lag-adjusted curvature setpoint.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LagAdjustedCurvature {
    /// Curvature to command, 1/m
    pub curvature: f64,
    /// Curvature rate setpoint, 1/(m·s)
    pub curvature_rate: f64,
}

/// Curvature lag compensation for a single actuator delay.
///
/// `v_ego` is floored at [`MIN_SPEED`]. The heading error is interpolated at
/// `delay = actuator_delay + DELAY_MARGIN_S`; the average curvature over that
/// window is `psi / (v · delay)` and the instantaneous target extrapolates to
/// `2 · average - curvature[0]`. Both outputs are bounded by
/// `MAX_LATERAL_JERK / v²`: the rate directly, the curvature per
/// [`DT_MDL`] around `curvature[0]`.
///
/// # RT Safety
///
/// - No heap allocations
/// - O([`CONTROL_N`](crate::CONTROL_N)) time complexity
pub fn lag_adjusted_curvature(
    v_ego: f64,
    actuator_delay_s: f64,
    profile: &CurvatureProfile,
) -> LagAdjustedCurvature {
    let v_ego = if v_ego.is_nan() { MIN_SPEED } else { v_ego.max(MIN_SPEED) };
    let delay = actuator_delay_s + DELAY_MARGIN_S;

    let current = profile.current_curvature();
    let psi = profile.psi_at(delay);
    let average = psi / (v_ego * delay);
    let desired = 2.0 * average - current;

    let max_rate = MAX_LATERAL_JERK / v_ego.powi(2);
    let curvature_rate = profile.current_curvature_rate().clamp(-max_rate, max_rate);
    let max_step = max_rate * DT_MDL;
    let curvature = desired.clamp(current - max_step, current + max_step);

    LagAdjustedCurvature {
        curvature,
        curvature_rate,
    }
}

/// Lag compensator bound to one vehicle's actuator delay.
#[derive(Debug, Clone, Copy)]
pub struct LagCompensator {
    actuator_delay_s: f64,
}

impl LagCompensator {
    /// Create a compensator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] unless the delay is finite,
    /// positive and at most 2 seconds.
    pub fn new(actuator_delay_s: f64) -> Result<Self, ValidationError> {
        validate!(
            actuator_delay_s.is_finite()
                && actuator_delay_s > 0.0
                && actuator_delay_s <= MAX_ACTUATOR_DELAY_S,
            ValidationError::out_of_range(
                "steer_actuator_delay_s",
                actuator_delay_s,
                0.0,
                MAX_ACTUATOR_DELAY_S
            )
        );
        Ok(Self { actuator_delay_s })
    }

    /// Actuator delay, seconds.
    pub fn actuator_delay_s(&self) -> f64 {
        self.actuator_delay_s
    }

    /// Total compensated delay, seconds.
    pub fn total_delay_s(&self) -> f64 {
        self.actuator_delay_s + DELAY_MARGIN_S
    }

    /// Compensate one tick's profile.
    pub fn compensate(&self, v_ego: f64, profile: &CurvatureProfile) -> LagAdjustedCurvature {
        lag_adjusted_curvature(v_ego, self.actuator_delay_s, profile)
    }
}
