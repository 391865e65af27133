//! Steer Torque Rate Limiter
//!
//! Bounds the steering torque command sent to the EPS each tick. The request
//! is first held within a band around the measured EPS motor torque so a
//! driver pushing against the wheel wins, then rate limited with asymmetric
//! steps depending on whether the magnitude grows or shrinks.

use serde::{Deserialize, Serialize};

use crate::rate_limit::rate_limit;

/// Static steering torque limits for one vehicle family.
///
/// All values are in EPS torque units.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteerTorqueLimits {
    /// Largest torque magnitude that may ever be commanded
    pub steer_max: i32,
    /// Largest magnitude increase per tick
    pub steer_delta_up: i32,
    /// Largest magnitude decrease per tick
    pub steer_delta_down: i32,
    /// Largest allowed difference between command and measured motor torque
    pub steer_error_max: i32,
}

impl SteerTorqueLimits {
    /// Create a new set of limits.
    ///
    /// # Example
    ///
    /// ```
    /// use drivecore_filters::SteerTorqueLimits;
    ///
    /// let limits = SteerTorqueLimits::new(261, 3, 3, 80);
    /// assert_eq!(limits.steer_max, 261);
    /// ```
    pub const fn new(
        steer_max: i32,
        steer_delta_up: i32,
        steer_delta_down: i32,
        steer_error_max: i32,
    ) -> Self {
        Self {
            steer_max,
            steer_delta_up,
            steer_delta_down,
            steer_error_max,
        }
    }

    /// Convert a normalized steer request in `[-1, 1]` to a torque request.
    ///
    /// Out of range requests are clamped; NaN maps to zero.
    #[inline]
    pub fn request_from_normalized(&self, steer: f64) -> i32 {
        if !steer.is_finite() {
            return 0;
        }
        let max = f64::from(self.steer_max);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "value is clamped to the i32 steer_max range before the cast"
        )]
        let request = (steer * max).round().clamp(-max, max) as i32;
        request
    }
}

/// Persistent state for the steer torque limiter.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SteerTorqueState {
    /// Torque applied on the previous tick
    pub last_applied: i32,
}

impl SteerTorqueState {
    /// Create a new limiter state starting from zero torque.
    pub const fn new() -> Self {
        Self { last_applied: 0 }
    }
}

/// Limit a steering torque request.
///
/// Given the requested torque, the EPS motor torque and the previous applied
/// torque, the output:
///
/// 1. stays within `steer_error_max` of the motor torque and within
///    `±steer_max`;
/// 2. grows in magnitude by at most `steer_delta_up` per tick;
/// 3. shrinks in magnitude by at most `steer_delta_down` per tick, with a
///    sign crossing bounded by `steer_delta_up`.
///
/// The result is stored as the new `last_applied`.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Saturating arithmetic; never panics
///
/// # Example
///
/// ```
/// use drivecore_filters::prelude::*;
///
/// let limits = SteerTorqueLimits::new(261, 3, 3, 80);
/// let mut state = SteerTorqueState::new();
///
/// for _ in 0..10 {
///     steer_torque_filter(261, 0, &limits, &mut state);
/// }
/// assert_eq!(state.last_applied, 30);
/// ```
#[inline]
pub fn steer_torque_filter(
    request: i32,
    motor_torque: i32,
    limits: &SteerTorqueLimits,
    state: &mut SteerTorqueState,
) -> i32 {
    let err = limits.steer_error_max;
    let max = limits.steer_max;
    let up = limits.steer_delta_up;
    let down = limits.steer_delta_down;
    let last = state.last_applied;

    let max_lim = motor_torque.saturating_add(err).max(err).min(max);
    let min_lim = motor_torque
        .saturating_sub(err)
        .min(err.saturating_neg())
        .max(max.saturating_neg());
    let bounded = request.min(max_lim).max(min_lim);

    let (down_step, up_step) = if last > 0 {
        (
            down.saturating_neg()
                .max(up.saturating_neg().saturating_sub(last)),
            up,
        )
    } else {
        (up.saturating_neg(), down.min(up.saturating_sub(last)))
    };

    let applied = rate_limit(bounded, last, down_step, up_step);
    state.last_applied = applied;
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrysler() -> SteerTorqueLimits {
        SteerTorqueLimits::new(261, 3, 3, 80)
    }

    #[test]
    fn test_ramps_up_by_delta_up() {
        let limits = chrysler();
        let mut state = SteerTorqueState::new();

        assert_eq!(steer_torque_filter(261, 0, &limits, &mut state), 3);
        assert_eq!(steer_torque_filter(261, 0, &limits, &mut state), 6);
        assert_eq!(steer_torque_filter(261, 0, &limits, &mut state), 9);
    }

    #[test]
    fn test_bounded_by_motor_torque_error() {
        let limits = SteerTorqueLimits::new(261, 300, 300, 80);
        let mut state = SteerTorqueState::new();

        // Driver holds the wheel: motor torque stays at 0, command caps at error band
        assert_eq!(steer_torque_filter(261, 0, &limits, &mut state), 80);
        assert_eq!(steer_torque_filter(-261, 0, &limits, &mut state), -80);
    }

    #[test]
    fn test_error_band_follows_motor_torque() {
        let limits = SteerTorqueLimits::new(261, 300, 300, 80);
        let mut state = SteerTorqueState::new();

        assert_eq!(steer_torque_filter(261, 150, &limits, &mut state), 230);
        assert_eq!(steer_torque_filter(261, 250, &limits, &mut state), 261);
    }

    #[test]
    fn test_ramps_down_by_delta_down() {
        let limits = SteerTorqueLimits::new(261, 3, 10, 300);
        let mut state = SteerTorqueState { last_applied: 100 };

        assert_eq!(steer_torque_filter(0, 100, &limits, &mut state), 90);
        assert_eq!(steer_torque_filter(0, 90, &limits, &mut state), 80);
    }

    #[test]
    fn test_sign_crossing_bounded_by_delta_up() {
        let limits = SteerTorqueLimits::new(261, 3, 10, 300);
        let mut state = SteerTorqueState { last_applied: 2 };

        // Down step alone would reach -8; past zero the floor is -steer_delta_up
        assert_eq!(steer_torque_filter(-200, 0, &limits, &mut state), -3);
    }

    #[test]
    fn test_negative_side_mirrors_positive() {
        let limits = SteerTorqueLimits::new(261, 3, 10, 300);
        let mut state = SteerTorqueState { last_applied: -100 };

        assert_eq!(steer_torque_filter(0, -100, &limits, &mut state), -90);

        let mut state = SteerTorqueState { last_applied: -100 };
        assert_eq!(steer_torque_filter(-261, -100, &limits, &mut state), -103);
    }

    #[test]
    fn test_extreme_motor_torque_does_not_overflow() {
        let limits = chrysler();
        let mut state = SteerTorqueState::new();

        let out = steer_torque_filter(i32::MAX, i32::MAX, &limits, &mut state);
        assert!(out.abs() <= limits.steer_max);
        let out = steer_torque_filter(i32::MIN, i32::MIN, &limits, &mut state);
        assert!(out.abs() <= limits.steer_max);
    }

    #[test]
    fn test_request_from_normalized() {
        let limits = chrysler();
        assert_eq!(limits.request_from_normalized(1.0), 261);
        assert_eq!(limits.request_from_normalized(-0.5), -131);
        assert_eq!(limits.request_from_normalized(3.0), 261);
        assert_eq!(limits.request_from_normalized(f64::NAN), 0);
    }
}
