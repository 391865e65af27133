//! Property-Based Tests for Filters
//!
//! This module contains property tests that verify filter behavior
//! across a wide range of inputs.

use drivecore_filters::prelude::*;

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(512))]

        #[test]
        fn rate_limit_stays_in_window(
            new_value in -1e6f64..1e6,
            previous in -1e6f64..1e6,
            down in 0.0f64..100.0,
            up in 0.0f64..100.0,
        ) {
            let out = rate_limit(new_value, previous, -down, up);
            prop_assert!(out >= previous - down);
            prop_assert!(out <= previous + up);
        }

        #[test]
        fn rate_limit_idempotent_in_range(
            new_value in -1e3f64..1e3,
            previous in -1e3f64..1e3,
            down in 0.0f64..10.0,
            up in 0.0f64..10.0,
        ) {
            let once = rate_limit(new_value, previous, -down, up);
            let twice = rate_limit(once, previous, -down, up);
            prop_assert_eq!(once.to_bits(), twice.to_bits());
        }

        #[test]
        fn steer_torque_never_exceeds_max(
            requests in proptest::collection::vec(-5000i32..5000, 1..200),
            motor in -2000i32..2000,
        ) {
            let limits = SteerTorqueLimits::new(261, 3, 3, 80);
            let mut state = SteerTorqueState::new();

            for request in requests {
                let out = steer_torque_filter(request, motor, &limits, &mut state);
                prop_assert!(out.abs() <= limits.steer_max);
            }
        }

        #[test]
        fn steer_torque_step_is_bounded(
            requests in proptest::collection::vec(-400i32..400, 1..200),
            motors in proptest::collection::vec(-400i32..400, 200),
        ) {
            let limits = SteerTorqueLimits::new(361, 14, 14, 400);
            let mut state = SteerTorqueState::new();

            for (request, motor) in requests.into_iter().zip(motors) {
                let last = state.last_applied;
                let out = steer_torque_filter(request, motor, &limits, &mut state);
                prop_assert!((out - last).abs() <= limits.steer_delta_up.max(limits.steer_delta_down));
            }
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone)]
    struct FiniteF64(f64);

    impl Arbitrary for FiniteF64 {
        fn arbitrary(g: &mut Gen) -> Self {
            let value = f64::arbitrary(g);
            FiniteF64(if value.is_finite() { value.clamp(-1e9, 1e9) } else { 0.0 })
        }
    }

    fn prop_zero_steps_freeze(new_value: FiniteF64, previous: FiniteF64) -> TestResult {
        let out = rate_limit(new_value.0, previous.0, 0.0, 0.0);
        if approx::relative_eq!(out, previous.0) {
            TestResult::passed()
        } else {
            TestResult::failed()
        }
    }

    #[test]
    fn quickcheck_zero_steps_freeze() {
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_zero_steps_freeze as fn(FiniteF64, FiniteF64) -> TestResult);
    }

    #[quickcheck]
    fn integer_rate_limit_in_window(new_value: i16, previous: i16, down: u8, up: u8) -> bool {
        let (new_value, previous) = (i32::from(new_value), i32::from(previous));
        let (down, up) = (i32::from(down), i32::from(up));
        let out = rate_limit(new_value, previous, -down, up);
        out >= previous - down && out <= previous + up
    }

    #[quickcheck]
    fn chained_rate_limit_tracks_previous(values: Vec<i16>) -> bool {
        let mut previous = 0.0_f64;
        values.into_iter().all(|v| {
            let out = rate_limit(f64::from(v), previous, -0.5, 0.25);
            let within = out >= previous - 0.5 - 1e-9 && out <= previous + 0.25 + 1e-9;
            previous = out;
            within
        })
    }
}
