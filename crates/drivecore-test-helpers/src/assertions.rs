//! Custom assertion macros for control outputs.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use drivecore_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a value is within a range.
///
/// # Example
///
/// ```rust
/// use drivecore_test_helpers::assert_in_range;
///
/// assert_in_range!(-1.5_f64, -3.5..=2.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $range:expr $(,)?) => {
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}", value, range);
        }
    };
    ($value:expr, $range:expr, $($arg:tt)+) => {
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}: {}", value, range, format_args!($($arg)+));
        }
    };
}

/// Assert that consecutive values of a sequence never differ by more
/// than `max_step`.
///
/// Used for slew-limited outputs such as brake ramps and steer torque.
///
/// # Example
///
/// ```rust
/// use drivecore_test_helpers::assert_step_bounded;
///
/// assert_step_bounded!(&[0.0_f64, -0.06, -0.12, -0.15], 0.06 + 1e-9);
/// ```
#[macro_export]
macro_rules! assert_step_bounded {
    ($sequence:expr, $max_step:expr $(,)?) => {
        let sequence = $sequence;
        let max_step = $max_step;
        for (i, pair) in sequence.windows(2).enumerate() {
            if let [prev, curr] = pair {
                let step = (*curr - *prev).abs();
                if step > max_step {
                    panic!(
                        "assertion failed: step {:?} -> {:?} at index {} exceeds {:?}",
                        prev, curr, i, max_step
                    );
                }
            }
        }
    };
}
