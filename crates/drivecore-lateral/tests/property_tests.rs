//! Property tests for lag compensation and steering authorization.

use drivecore_filters::{SteerTorqueLimits, SteerTorqueState};
use drivecore_lateral::prelude::*;
use drivecore_lateral::{MAX_LATERAL_JERK, MIN_SPEED};
use proptest::prelude::*;

fn horizon() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-0.5f64..0.5, CONTROL_N)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_flat_zero_profile_gives_zero(v in 0.0f64..60.0, delay in 0.0f64..1.0) {
        let out = lag_adjusted_curvature(v, delay, &CurvatureProfile::zeros());
        prop_assert!(out.curvature.abs() < 1e-15);
        prop_assert!(out.curvature_rate.abs() < 1e-15);
    }

    #[test]
    fn prop_outputs_within_jerk_bound(
        v in 0.0f64..60.0,
        delay in 0.0f64..1.0,
        psis in horizon(),
        curvatures in horizon(),
        rates in horizon(),
    ) {
        let profile = CurvatureProfile::from_slices(&psis, &curvatures, &rates);
        prop_assert!(!profile.is_fallback());
        let out = lag_adjusted_curvature(v, delay, &profile);
        let max_rate = MAX_LATERAL_JERK / v.max(MIN_SPEED).powi(2);
        let current = profile.current_curvature();

        prop_assert!(out.curvature.is_finite());
        prop_assert!(out.curvature_rate.abs() <= max_rate);
        prop_assert!((out.curvature - current).abs() <= max_rate * 0.05 + 1e-12);
    }

    #[test]
    fn prop_wrong_length_is_zero_output(
        v in 1.0f64..40.0,
        len in 0usize..40,
        value in -1.0f64..1.0,
    ) {
        prop_assume!(len != CONTROL_N);
        let bad = vec![value; len];
        let profile = CurvatureProfile::from_slices(&bad, &bad, &bad);
        prop_assert!(profile.is_fallback());
        let out = lag_adjusted_curvature(v, 0.2, &profile);
        prop_assert!(out.curvature.abs() < 1e-15);
    }

    #[test]
    fn prop_steer_only_when_bit_held_two_ticks(
        speeds in proptest::collection::vec(0.0f64..30.0, 1..300),
        faults in proptest::collection::vec(any::<bool>(), 300),
        requests in proptest::collection::vec(-400i32..400, 300),
    ) {
        let mut gate = LateralAuthorization::new(AuthorizationParams {
            min_steer_speed: 17.5,
            release_hysteresis: Some(3.0),
            relock_ticks: 20,
        });
        let limits = SteerTorqueLimits::new(261, 3, 3, 80);
        let mut steer = SteerTorqueState::new();
        let mut prev_bit = false;

        for (tick, ((v, fault), request)) in speeds.iter().zip(&faults).zip(&requests).enumerate() {
            let decision = gate.update(
                &AuthorizationInputs {
                    v_ego: *v,
                    lateral_active: true,
                    steer_fault_temporary: *fault,
                    steer_fault_permanent: false,
                },
                tick as u64,
            );
            if *fault {
                prop_assert!(!decision.control_bit);
            }
            let torque = gated_steer_torque(&decision, *request, 0, &limits, &mut steer);
            if !(decision.control_bit && prev_bit) {
                prop_assert_eq!(torque, 0);
                prop_assert_eq!(steer.last_applied, 0);
            }
            prop_assert!(torque.abs() <= 261);
            prev_bit = decision.control_bit;
        }
    }
}
