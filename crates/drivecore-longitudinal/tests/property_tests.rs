//! Property tests for the longitudinal shaper.

use drivecore_longitudinal::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_first_brake_is_half_target(target in -3.5f64..=0.0) {
        let mut state = LongitudinalShaperState::new();
        let out = brake_ramp(target, &mut state, BRAKE_CHANGE);
        prop_assert_eq!(out.to_bits(), (target / 2.0).min(0.0).to_bits());
    }

    #[test]
    fn prop_brake_converges_monotonically(target in -3.5f64..=0.0, ticks in 1usize..400) {
        let mut state = LongitudinalShaperState::new();
        let mut prev = brake_ramp(target, &mut state, BRAKE_CHANGE);
        for _ in 0..ticks {
            let out = brake_ramp(target, &mut state, BRAKE_CHANGE);
            prop_assert!(out >= target, "overshoot: {} past {}", out, target);
            prop_assert!(out <= prev);
            prop_assert!(prev - out <= BRAKE_CHANGE + 1e-12);
            prev = out;
        }
    }

    #[test]
    fn prop_brake_step_bounded_for_any_targets(
        targets in proptest::collection::vec(-3.5f64..=0.0, 2..200),
    ) {
        let mut state = LongitudinalShaperState::new();
        let mut prev: Option<f64> = None;
        for target in targets {
            let out = brake_ramp(target, &mut state, BRAKE_CHANGE);
            if let Some(p) = prev {
                prop_assert!((out - p).abs() <= BRAKE_CHANGE + 1e-12);
            }
            prev = Some(out);
        }
    }

    #[test]
    fn prop_exactly_one_command(
        accels in proptest::collection::vec(-10.0f64..10.0, 1..100),
        enabled in any::<bool>(),
    ) {
        let mut shaper = LongitudinalShaper::new(LongitudinalParams::default(), 2_100.0);
        for accel in accels {
            let command = shaper.update(&LongitudinalInputs {
                enabled,
                desired_accel: accel,
                v_ego_raw: 15.0,
                engine_torque: 20.0,
                engine_rpm: 1_800.0,
            });
            prop_assert!(command.brake_target().is_some() != command.torque_target().is_some());
            prop_assert_eq!(command.is_braking(), accel <= 0.0);
        }
    }
}
