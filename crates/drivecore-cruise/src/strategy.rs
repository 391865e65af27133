//! Host-owned set-speed strategies.
//!
//! Both strategies are pure functions of the current set speed, the tick's
//! button events and the debouncer's timers and snapshots. They run only for
//! host-owned cruise; PCM-native cruise never reaches them.

use drivecore_buttons::{
    ButtonEvent, ButtonKind, ButtonTracker, RepeatMode, ends_long_press, is_long_press_tick,
    is_short_press,
};
use serde::{Deserialize, Serialize};

use crate::arbitrator::CruiseInputs;
use crate::constants::{MS_TO_KPH, V_CRUISE_MAX};

/// Long presses move the generic strategy by five single steps.
const LONG_PRESS_MULTIPLIER: f64 = 5.0;

/// Kinds with a hold timer that drives set-speed changes.
const TIMED_KINDS: [ButtonKind; 2] = [ButtonKind::Accel, ButtonKind::Decel];

/// Who owns the set speed, and how button presses change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CruiseStrategy {
    /// The vehicle's cruise module owns the set speed
    PcmNative,
    /// Host-owned, short press steps and long-press auto-repeat
    #[default]
    Generic,
    /// Host-owned, short and long press actions swapped
    InvertedFamily,
}

impl CruiseStrategy {
    /// True when this system owns the set speed.
    pub fn is_host_owned(self) -> bool {
        !matches!(self, CruiseStrategy::PcmNative)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generic host-owned update.
///
/// Returns the new set speed, or `None` when nothing changes this tick.
///
/// Candidate selection: the first release of an accel/decel button on this
/// tick is a short press, unless it ends a long press, which stops the tick.
/// Otherwise a held accel/decel button whose timer sits on a nonzero multiple
/// of the threshold is a long press.
///
/// A candidate is dropped when accelerating out of standstill (at press time
/// or now) or when the system was not yet enabled at press time. A long press
/// off a step boundary snaps to the next boundary in the press direction
/// instead of moving a full step. With the accelerator pressed a decrease
/// never goes below the current vehicle speed. The result is rounded to a
/// tenth and clipped to the unit floor and [`V_CRUISE_MAX`].
pub fn update_generic(
    set_speed_kph: f64,
    inputs: &CruiseInputs,
    events: &[ButtonEvent],
    buttons: &ButtonTracker,
    long_press_frames: u32,
) -> Option<f64> {
    if !inputs.enabled {
        return None;
    }

    let release = events
        .iter()
        .find(|e| e.kind.adjusts_speed() && !e.pressed);
    let (kind, long_press) = match release {
        Some(e) if ends_long_press(e, long_press_frames) => return None,
        Some(e) => (e.kind, false),
        None => {
            let kind = TIMED_KINDS.into_iter().find(|kind| {
                is_long_press_tick(
                    buttons.timer(*kind).active_frames,
                    long_press_frames,
                    RepeatMode::AutoRepeat,
                )
            })?;
            (kind, true)
        }
    };

    let snapshot = buttons.snapshot(kind);
    if kind == ButtonKind::Accel && (snapshot.standstill_at_press || inputs.standstill) {
        return None;
    }
    if !snapshot.enabled_at_press {
        return None;
    }

    let sign = kind.speed_sign()?;
    let step = inputs.units.generic_step_kph()
        * if long_press {
            LONG_PRESS_MULTIPLIER
        } else {
            1.0
        };

    let mut v = set_speed_kph;
    if long_press && v.rem_euclid(step) != 0.0 {
        let steps = v / step;
        v = if sign > 0.0 { steps.ceil() } else { steps.floor() } * step;
    } else {
        v += step * sign;
    }

    if inputs.gas_pressed && kind == ButtonKind::Decel {
        v = v.max(inputs.v_ego * MS_TO_KPH);
    }

    Some(round_to_tenth(v).clamp(inputs.units.min_set_speed_kph(), V_CRUISE_MAX))
}

/// Inverted-family host-owned update.
///
/// This family's wiring swaps the press semantics, and the swap is kept: a
/// release shorter than the threshold jumps to the next five-unit boundary
/// in the press direction (clipped to the unit floor and [`V_CRUISE_MAX`]),
/// while holding for exactly the threshold moves by one unit without
/// clipping. There is no auto-repeat.
///
/// Returns the set speed raised to at least the unit floor. The caller owns
/// the upper clip of the one-unit action.
pub fn update_inverted(
    set_speed_kph: f64,
    inputs: &CruiseInputs,
    events: &[ButtonEvent],
    buttons: &ButtonTracker,
    long_press_frames: u32,
) -> f64 {
    let floor = inputs.units.min_set_speed_kph();
    let mut v = set_speed_kph;

    if inputs.enabled {
        for event in events.iter().filter(|e| e.kind.adjusts_speed()) {
            if is_short_press(event, long_press_frames) {
                v = jump_to_boundary(v, event.kind, inputs.units.long_step_kph())
                    .clamp(floor, V_CRUISE_MAX);
            }
        }

        for kind in TIMED_KINDS {
            if is_long_press_tick(
                buttons.timer(kind).active_frames,
                long_press_frames,
                RepeatMode::Once,
            ) && let Some(sign) = kind.speed_sign()
            {
                v += sign * inputs.units.unit_step_kph();
            }
        }
    }

    v.max(floor)
}

fn jump_to_boundary(v: f64, kind: ButtonKind, step: f64) -> f64 {
    match kind {
        ButtonKind::Accel => v + (step - v.rem_euclid(step)),
        ButtonKind::Decel => v - (step - (step - v).rem_euclid(step)),
        _ => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpeedUnits;
    use crate::constants::MPH_TO_KPH;
    use approx::assert_relative_eq;
    use drivecore_buttons::{ButtonSample, PressContext};

    const ENABLED: PressContext = PressContext {
        standstill: false,
        enabled: true,
    };

    fn inputs() -> CruiseInputs {
        CruiseInputs {
            cruise_available: true,
            enabled: true,
            ..CruiseInputs::default()
        }
    }

    /// Hold `kind` for `ticks` ticks and return the tracker with the last
    /// tick's events.
    fn hold(kind: ButtonKind, ticks: u32) -> (ButtonTracker, drivecore_buttons::ButtonEvents) {
        let mut tracker = ButtonTracker::new();
        let mut events = drivecore_buttons::ButtonEvents::new();
        for _ in 0..ticks {
            events = tracker.update(&ButtonSample::with_pressed(&[kind]), ENABLED);
        }
        (tracker, events)
    }

    fn tap(kind: ButtonKind, ticks: u32) -> (ButtonTracker, drivecore_buttons::ButtonEvents) {
        let (mut tracker, _) = hold(kind, ticks);
        let events = tracker.update(&ButtonSample::released(), ENABLED);
        (tracker, events)
    }

    #[test]
    fn test_generic_short_press_steps_one_unit() {
        let (tracker, events) = tap(ButtonKind::Accel, 3);
        let v = update_generic(60.0, &inputs(), &events, &tracker, 50);
        assert_eq!(v, Some(61.0));

        let (tracker, events) = tap(ButtonKind::Decel, 3);
        let v = update_generic(60.0, &inputs(), &events, &tracker, 50);
        assert_eq!(v, Some(59.0));
    }

    #[test]
    fn test_generic_imperial_short_press() {
        let (tracker, events) = tap(ButtonKind::Accel, 1);
        let imperial = CruiseInputs {
            units: SpeedUnits::Imperial,
            ..inputs()
        };
        let v = update_generic(64.0, &imperial, &events, &tracker, 50);
        assert_eq!(v, Some(65.6));
    }

    #[test]
    fn test_generic_long_press_on_boundary_moves_full_step() {
        let (tracker, events) = hold(ButtonKind::Accel, 50);
        assert_eq!(update_generic(60.0, &inputs(), &events, &tracker, 50), Some(65.0));
    }

    #[test]
    fn test_generic_long_press_snaps_to_boundary() {
        let (tracker, events) = hold(ButtonKind::Accel, 50);
        assert_eq!(update_generic(62.0, &inputs(), &events, &tracker, 50), Some(65.0));

        let (tracker, events) = hold(ButtonKind::Decel, 50);
        assert_eq!(update_generic(62.0, &inputs(), &events, &tracker, 50), Some(60.0));
    }

    #[test]
    fn test_generic_long_press_auto_repeats() {
        let (tracker, events) = hold(ButtonKind::Accel, 100);
        assert_eq!(update_generic(65.0, &inputs(), &events, &tracker, 50), Some(70.0));

        let (tracker, events) = hold(ButtonKind::Accel, 75);
        assert_eq!(update_generic(65.0, &inputs(), &events, &tracker, 50), None);
    }

    #[test]
    fn test_generic_release_after_long_press_changes_nothing() {
        let (tracker, events) = tap(ButtonKind::Accel, 50);
        assert_eq!(update_generic(65.0, &inputs(), &events, &tracker, 50), None);
    }

    #[test]
    fn test_generic_disabled_does_nothing() {
        let (tracker, events) = tap(ButtonKind::Accel, 2);
        let disabled = CruiseInputs {
            enabled: false,
            ..inputs()
        };
        assert_eq!(update_generic(60.0, &disabled, &events, &tracker, 50), None);
    }

    #[test]
    fn test_generic_accel_ignored_at_standstill() {
        let (tracker, events) = tap(ButtonKind::Accel, 2);
        let standstill = CruiseInputs {
            standstill: true,
            ..inputs()
        };
        assert_eq!(update_generic(60.0, &standstill, &events, &tracker, 50), None);

        // Decel still works at standstill
        let (tracker, events) = tap(ButtonKind::Decel, 2);
        assert_eq!(update_generic(60.0, &standstill, &events, &tracker, 50), Some(59.0));
    }

    #[test]
    fn test_generic_standstill_at_press_blocks_accel() {
        let mut tracker = ButtonTracker::new();
        tracker.update(
            &ButtonSample::with_pressed(&[ButtonKind::Accel]),
            PressContext {
                standstill: true,
                enabled: true,
            },
        );
        let events = tracker.update(&ButtonSample::released(), ENABLED);
        assert_eq!(update_generic(60.0, &inputs(), &events, &tracker, 50), None);
    }

    #[test]
    fn test_generic_press_before_enable_is_ignored() {
        let mut tracker = ButtonTracker::new();
        tracker.update(
            &ButtonSample::with_pressed(&[ButtonKind::Decel]),
            PressContext {
                standstill: false,
                enabled: false,
            },
        );
        let events = tracker.update(&ButtonSample::released(), ENABLED);
        assert_eq!(update_generic(60.0, &inputs(), &events, &tracker, 50), None);
    }

    #[test]
    fn test_generic_gas_pressed_clamps_decrease_to_vehicle_speed() {
        let (tracker, events) = tap(ButtonKind::Decel, 2);
        let overriding = CruiseInputs {
            gas_pressed: true,
            v_ego: 25.0,
            ..inputs()
        };
        assert_eq!(update_generic(60.0, &overriding, &events, &tracker, 50), Some(90.0));
    }

    #[test]
    fn test_generic_clips_to_bounds() {
        let (tracker, events) = tap(ButtonKind::Decel, 2);
        assert_eq!(update_generic(8.0, &inputs(), &events, &tracker, 50), Some(8.0));

        let (tracker, events) = tap(ButtonKind::Accel, 2);
        assert_eq!(update_generic(145.0, &inputs(), &events, &tracker, 50), Some(145.0));

        let imperial = CruiseInputs {
            units: SpeedUnits::Imperial,
            ..inputs()
        };
        let (tracker, events) = tap(ButtonKind::Decel, 2);
        assert_eq!(update_generic(32.0, &imperial, &events, &tracker, 50), Some(32.0));
    }

    #[test]
    fn test_inverted_quick_release_jumps_to_boundary() {
        let (tracker, events) = tap(ButtonKind::Accel, 3);
        assert_relative_eq!(update_inverted(52.0, &inputs(), &events, &tracker, 30), 55.0);
        assert_relative_eq!(update_inverted(50.0, &inputs(), &events, &tracker, 30), 55.0);

        let (tracker, events) = tap(ButtonKind::Decel, 3);
        assert_relative_eq!(update_inverted(52.0, &inputs(), &events, &tracker, 30), 50.0);
        assert_relative_eq!(update_inverted(50.0, &inputs(), &events, &tracker, 30), 45.0);
    }

    #[test]
    fn test_inverted_hold_moves_one_unit_once() {
        let (tracker, events) = hold(ButtonKind::Accel, 30);
        assert_relative_eq!(update_inverted(52.0, &inputs(), &events, &tracker, 30), 53.0);

        let (tracker, events) = hold(ButtonKind::Accel, 60);
        assert_relative_eq!(update_inverted(52.0, &inputs(), &events, &tracker, 30), 52.0);
    }

    #[test]
    fn test_inverted_release_after_hold_changes_nothing() {
        let (tracker, events) = tap(ButtonKind::Decel, 30);
        assert_relative_eq!(update_inverted(52.0, &inputs(), &events, &tracker, 30), 52.0);
    }

    #[test]
    fn test_inverted_imperial_steps() {
        let imperial = CruiseInputs {
            units: SpeedUnits::Imperial,
            ..inputs()
        };
        let (tracker, events) = tap(ButtonKind::Accel, 2);
        assert_relative_eq!(update_inverted(50.0, &imperial, &events, &tracker, 30), 56.0);

        let (tracker, events) = hold(ButtonKind::Decel, 30);
        assert_relative_eq!(
            update_inverted(50.0, &imperial, &events, &tracker, 30),
            50.0 - MPH_TO_KPH
        );
    }

    #[test]
    fn test_inverted_returns_at_least_floor() {
        let (tracker, events) = hold(ButtonKind::Decel, 30);
        assert_relative_eq!(update_inverted(8.5, &inputs(), &events, &tracker, 30), 8.0);

        let (tracker, events) = tap(ButtonKind::Decel, 2);
        assert_relative_eq!(update_inverted(9.0, &inputs(), &events, &tracker, 30), 8.0);
    }

    #[test]
    fn test_inverted_disabled_only_applies_floor() {
        let (tracker, events) = tap(ButtonKind::Accel, 2);
        let disabled = CruiseInputs {
            enabled: false,
            ..inputs()
        };
        assert_relative_eq!(update_inverted(3.0, &disabled, &events, &tracker, 30), 8.0);
        assert_relative_eq!(update_inverted(60.0, &disabled, &events, &tracker, 30), 60.0);
    }

    #[test]
    fn test_strategy_ownership() {
        assert!(!CruiseStrategy::PcmNative.is_host_owned());
        assert!(CruiseStrategy::Generic.is_host_owned());
        assert!(CruiseStrategy::InvertedFamily.is_host_owned());
    }
}
