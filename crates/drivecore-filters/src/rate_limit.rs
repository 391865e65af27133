//! Rate Limiter
//!
//! This module provides the rate limit primitive that restricts how far a
//! value may move from its previous value in a single tick.

use core::ops::Add;

/// Clamp `new_value` to `[previous + down_step, previous + up_step]`.
///
/// Callers pass `down_step <= 0 <= up_step`. With both steps zero the value
/// is frozen at `previous`. Values already inside the window are returned
/// unchanged.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Never panics, even when the window is inverted
///
/// # Example
///
/// ```
/// use drivecore_filters::rate_limit;
///
/// assert_eq!(rate_limit(5.0, 0.0, -0.5, 0.5), 0.5);
/// assert_eq!(rate_limit(-5.0, 0.0, -0.5, 0.5), -0.5);
/// assert_eq!(rate_limit(0.25, 0.0, -0.5, 0.5), 0.25);
/// assert_eq!(rate_limit(12, 10, -1, 1), 11);
/// ```
#[inline]
pub fn rate_limit<T>(new_value: T, previous: T, down_step: T, up_step: T) -> T
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    let floor = previous + down_step;
    let ceiling = previous + up_step;

    if new_value > ceiling {
        ceiling
    } else if new_value < floor {
        floor
    } else {
        new_value
    }
}
