//! Button debounce state machine

use crate::{
    ButtonChangeSnapshot, ButtonEvent, ButtonEvents, ButtonKind, ButtonSample, ButtonTimer,
    PerButton,
};

/// System state at the time of a sample, captured into the snapshot of any
/// button pressed on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressContext {
    /// Vehicle at standstill
    pub standstill: bool,
    /// Control enabled
    pub enabled: bool,
}

/// Tracks debounced button state, hold timers and press-time snapshots.
///
/// Call [`ButtonTracker::update`] once per tick, before anything consumes the
/// timers or snapshots.
#[derive(Debug, Clone, Default)]
pub struct ButtonTracker {
    pressed: PerButton<bool>,
    timers: PerButton<ButtonTimer>,
    snapshots: PerButton<ButtonChangeSnapshot>,
}

impl ButtonTracker {
    /// Tracker with every button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick.
    ///
    /// Returns one event per button whose debounced state changed. A press
    /// emits `held_frames == 0`; a release emits the number of ticks held.
    pub fn update(&mut self, sample: &ButtonSample, ctx: PressContext) -> ButtonEvents {
        let mut events = ButtonEvents::new();

        for kind in ButtonKind::ALL {
            let was_pressed = *self.pressed.get(kind);
            let is_pressed = sample.get(kind).unwrap_or(was_pressed);
            let timer = self.timers.get_mut(kind);

            let event = match (was_pressed, is_pressed) {
                (false, true) => {
                    timer.active_frames = 1;
                    *self.snapshots.get_mut(kind) = ButtonChangeSnapshot {
                        standstill_at_press: ctx.standstill,
                        enabled_at_press: ctx.enabled,
                    };
                    Some(ButtonEvent::press(kind))
                }
                (true, true) => {
                    timer.active_frames = timer.active_frames.saturating_add(1);
                    None
                }
                (true, false) => {
                    let held = timer.active_frames;
                    timer.active_frames = 0;
                    Some(ButtonEvent::release(kind, held))
                }
                (false, false) => None,
            };

            *self.pressed.get_mut(kind) = is_pressed;

            if let Some(event) = event
                && let Err(dropped) = events.push(event)
            {
                tracing::warn!(kind = ?dropped.kind, "button event buffer full, event dropped");
            }
        }

        events
    }

    /// Hold timer for `kind`.
    pub fn timer(&self, kind: ButtonKind) -> ButtonTimer {
        *self.timers.get(kind)
    }

    /// Hold timers for every kind.
    pub fn timers(&self) -> &PerButton<ButtonTimer> {
        &self.timers
    }

    /// State captured when `kind` was last pressed.
    pub fn snapshot(&self, kind: ButtonKind) -> ButtonChangeSnapshot {
        *self.snapshots.get(kind)
    }

    /// Debounced pressed state of `kind`.
    pub fn is_pressed(&self, kind: ButtonKind) -> bool {
        *self.pressed.get(kind)
    }

    /// Release every button and clear timers and snapshots.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> PressContext {
        PressContext {
            standstill: false,
            enabled: true,
        }
    }

    #[test]
    fn test_press_edge_starts_timer() {
        let mut tracker = ButtonTracker::new();
        let events = tracker.update(&ButtonSample::with_pressed(&[ButtonKind::Accel]), enabled());

        assert_eq!(events.len(), 1);
        assert_eq!(events.first(), Some(&ButtonEvent::press(ButtonKind::Accel)));
        assert_eq!(tracker.timer(ButtonKind::Accel).active_frames, 1);
    }

    #[test]
    fn test_hold_increments_and_release_reports_duration() {
        let mut tracker = ButtonTracker::new();
        let held = ButtonSample::with_pressed(&[ButtonKind::Decel]);

        for _ in 0..5 {
            tracker.update(&held, enabled());
        }
        assert_eq!(tracker.timer(ButtonKind::Decel).active_frames, 5);

        let events = tracker.update(&ButtonSample::released(), enabled());
        assert_eq!(events.first(), Some(&ButtonEvent::release(ButtonKind::Decel, 5)));
        assert_eq!(tracker.timer(ButtonKind::Decel).active_frames, 0);
    }

    #[test]
    fn test_no_events_without_edges() {
        let mut tracker = ButtonTracker::new();
        let held = ButtonSample::with_pressed(&[ButtonKind::Set]);

        tracker.update(&held, enabled());
        let events = tracker.update(&held, enabled());
        assert!(events.is_empty());

        let events = tracker.update(&ButtonSample::released(), enabled());
        assert_eq!(events.len(), 1);
        let events = tracker.update(&ButtonSample::released(), enabled());
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_sample_holds_last_known() {
        let mut tracker = ButtonTracker::new();

        tracker.update(&ButtonSample::with_pressed(&[ButtonKind::Accel]), enabled());
        let events = tracker.update(&ButtonSample::missing(), enabled());

        assert!(events.is_empty());
        assert!(tracker.is_pressed(ButtonKind::Accel));
        assert_eq!(tracker.timer(ButtonKind::Accel).active_frames, 2);
    }

    #[test]
    fn test_snapshot_captured_at_press_and_held() {
        let mut tracker = ButtonTracker::new();
        let held = ButtonSample::with_pressed(&[ButtonKind::Accel]);

        tracker.update(
            &held,
            PressContext {
                standstill: true,
                enabled: false,
            },
        );
        tracker.update(&held, enabled());

        let snapshot = tracker.snapshot(ButtonKind::Accel);
        assert!(snapshot.standstill_at_press);
        assert!(!snapshot.enabled_at_press);
    }

    #[test]
    fn test_multiple_kinds_in_one_tick() {
        let mut tracker = ButtonTracker::new();
        let events = tracker.update(
            &ButtonSample::with_pressed(&[ButtonKind::Accel, ButtonKind::Cancel, ButtonKind::Other]),
            enabled(),
        );
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_reset() {
        let mut tracker = ButtonTracker::new();
        tracker.update(&ButtonSample::with_pressed(&[ButtonKind::Accel]), enabled());
        tracker.reset();
        assert!(!tracker.is_pressed(ButtonKind::Accel));
        assert_eq!(tracker.timer(ButtonKind::Accel), ButtonTimer::default());
    }
}
