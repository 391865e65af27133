//! Property tests for the cruise speed arbitrator.
//!
//! Random button scripts are driven through the debouncer and arbitrator and
//! the set speed is checked against its bounds on every tick.

use drivecore_buttons::{ButtonKind, ButtonSample, ButtonTracker, PressContext};
use drivecore_cruise::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Press {
    Idle,
    Accel,
    Decel,
    Both,
    Dropout,
}

impl Press {
    fn sample(self) -> ButtonSample {
        match self {
            Press::Idle => ButtonSample::released(),
            Press::Accel => ButtonSample::with_pressed(&[ButtonKind::Accel]),
            Press::Decel => ButtonSample::with_pressed(&[ButtonKind::Decel]),
            Press::Both => ButtonSample::with_pressed(&[ButtonKind::Accel, ButtonKind::Decel]),
            Press::Dropout => ButtonSample::missing(),
        }
    }
}

fn press_strategy() -> impl Strategy<Value = Press> {
    prop_oneof![
        4 => Just(Press::Idle),
        3 => Just(Press::Accel),
        3 => Just(Press::Decel),
        1 => Just(Press::Both),
        1 => Just(Press::Dropout),
    ]
}

/// Runs a button script, returning every set speed seen after the session
/// was enabled.
fn run_script(
    params: CruiseParams,
    units: SpeedUnits,
    v_ego: f64,
    gas_pressed: bool,
    script: &[(Press, u8)],
) -> Vec<f64> {
    let mut arbitrator = CruiseArbitrator::new(params);
    let mut buttons = ButtonTracker::new();
    let inputs = CruiseInputs {
        cruise_available: true,
        enabled: true,
        gas_pressed,
        v_ego,
        units,
        ..CruiseInputs::default()
    };
    let ctx = PressContext {
        standstill: false,
        enabled: true,
    };

    let events = buttons.update(&ButtonSample::released(), ctx);
    arbitrator.update(&inputs, &events, &buttons);
    arbitrator.initialize(&inputs, &events);

    let mut speeds = Vec::new();
    for (press, ticks) in script {
        for _ in 0..*ticks {
            let events = buttons.update(&press.sample(), ctx);
            let state = arbitrator.update(&inputs, &events, &buttons);
            speeds.push(state.set_speed_kph);
        }
    }
    speeds
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(128))]

    #[test]
    fn prop_generic_set_speed_within_bounds(
        script in proptest::collection::vec((press_strategy(), 1u8..120), 1..20),
        v_ego in 0.0f64..45.0,
        gas_pressed in any::<bool>(),
        metric in any::<bool>(),
    ) {
        let units = SpeedUnits::from_is_metric(metric);
        let floor = units.min_set_speed_kph();
        for v in run_script(CruiseParams::generic(50), units, v_ego, gas_pressed, &script) {
            prop_assert!((floor..=V_CRUISE_MAX).contains(&v), "set speed {} out of bounds", v);
        }
    }

    #[test]
    fn prop_inverted_set_speed_within_bounds(
        script in proptest::collection::vec((press_strategy(), 1u8..80), 1..20),
        v_ego in 0.0f64..45.0,
        metric in any::<bool>(),
    ) {
        let units = SpeedUnits::from_is_metric(metric);
        let floor = units.min_set_speed_kph();
        for v in run_script(CruiseParams::inverted_family(30), units, v_ego, false, &script) {
            prop_assert!((floor..=V_CRUISE_MAX).contains(&v), "set speed {} out of bounds", v);
        }
    }

    #[test]
    fn prop_generic_speeds_land_on_tenths(
        script in proptest::collection::vec((press_strategy(), 1u8..120), 1..20),
        metric in any::<bool>(),
    ) {
        let units = SpeedUnits::from_is_metric(metric);
        for v in run_script(CruiseParams::generic(50), units, 20.0, false, &script) {
            prop_assert!((v * 10.0 - (v * 10.0).round()).abs() < 1e-6);
        }
    }
}
