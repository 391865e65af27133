//! Brake ramp limiter.

use drivecore_filters::rate_limit;

/// Largest brake change per tick, m/s².
pub const BRAKE_CHANGE: f64 = 0.06;

/// Brake release smaller than this is ignored.
pub const BRAKE_RELEASE_DEADBAND: f64 = 0.01;

/// Persistent brake ramp state.
///
/// `last_brake` is `None` when not braking: after disengaging or after a
/// positive acceleration request. The next brake request then soft-starts.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LongitudinalShaperState {
    /// Brake target issued on the previous tick
    pub last_brake: Option<f64>,
}

impl LongitudinalShaperState {
    /// Create a state with no brake ramp in progress.
    pub const fn new() -> Self {
        Self { last_brake: None }
    }

    /// Drop the ramp so the next request starts fresh.
    pub fn clear(&mut self) {
        self.last_brake = None;
    }
}

/// Move the brake target one tick toward `target`.
///
/// - From `None` the output is `min(0, target / 2)`.
/// - Braking harder moves by `min(brake_change, gap / 2)` and never past the
///   target.
/// - Releasing moves the same damped step, but only once the gap exceeds
///   [`BRAKE_RELEASE_DEADBAND`]; smaller releases hold the previous value.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use drivecore_longitudinal::{BRAKE_CHANGE, LongitudinalShaperState, brake_ramp};
///
/// let mut state = LongitudinalShaperState::new();
/// assert_eq!(brake_ramp(-1.0, &mut state, BRAKE_CHANGE), -0.5);
/// assert!((brake_ramp(-1.0, &mut state, BRAKE_CHANGE) + 0.56).abs() < 1e-12);
/// ```
pub fn brake_ramp(target: f64, state: &mut LongitudinalShaperState, brake_change: f64) -> f64 {
    let next = match state.last_brake {
        None => (target / 2.0).min(0.0),
        Some(last) if target < last => {
            let step = brake_change.min((last - target) / 2.0);
            rate_limit(target, last, -step, 0.0)
        }
        Some(last) if target - last > BRAKE_RELEASE_DEADBAND => {
            let step = brake_change.min((target - last) / 2.0);
            rate_limit(target, last, 0.0, step)
        }
        Some(last) => last,
    };

    state.last_brake = Some(next);
    next
}
