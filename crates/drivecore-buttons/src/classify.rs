//! Short and long press classification

use serde::{Deserialize, Serialize};

use crate::{ButtonEvent, ButtonKind, ButtonTimer, MAX_EVENTS_PER_TICK, PerButton};

/// Classified action for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Released before the long-press threshold
    ShortPress,
    /// Held to the threshold, or a repeat interval past it
    LongPress,
}

/// Whether a held button keeps firing long presses every threshold interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Fire again on every multiple of the threshold
    #[default]
    AutoRepeat,
    /// Fire once, at the threshold
    Once,
}

/// One classified action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPress {
    /// Button acted on
    pub kind: ButtonKind,
    /// Short or long
    pub action: ButtonAction,
}

/// Classified actions for one tick.
pub type ClassifiedPresses = heapless::Vec<ClassifiedPress, MAX_EVENTS_PER_TICK>;

/// True on the tick a held button becomes a long press, and with
/// [`RepeatMode::AutoRepeat`] on every further multiple of the threshold.
///
/// A zero threshold never classifies.
pub fn is_long_press_tick(active_frames: u32, threshold: u32, repeat: RepeatMode) -> bool {
    if active_frames == 0 || threshold == 0 {
        return false;
    }
    match repeat {
        RepeatMode::Once => active_frames == threshold,
        RepeatMode::AutoRepeat => active_frames.checked_rem(threshold) == Some(0),
    }
}

/// A release shorter than the threshold is a short press.
pub fn is_short_press(event: &ButtonEvent, threshold: u32) -> bool {
    !event.pressed && event.held_frames < threshold
}

/// A release at or past the threshold ends a long press.
pub fn ends_long_press(event: &ButtonEvent, threshold: u32) -> bool {
    !event.pressed && event.held_frames >= threshold
}

/// Stateless press classifier with a fixed long-press threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClassifier {
    /// Ticks a button must be held to become a long press
    pub long_press_frames: u32,
    /// Long-press repeat behaviour
    pub repeat: RepeatMode,
}

impl ButtonClassifier {
    /// Create a classifier.
    pub fn new(long_press_frames: u32, repeat: RepeatMode) -> Self {
        Self {
            long_press_frames,
            repeat,
        }
    }

    /// Classify one tick: short presses from this tick's releases, long
    /// presses from the timers of held buttons.
    pub fn classify(
        &self,
        events: &[ButtonEvent],
        timers: &PerButton<ButtonTimer>,
    ) -> ClassifiedPresses {
        let mut presses = ClassifiedPresses::new();

        let shorts = events
            .iter()
            .filter(|e| is_short_press(e, self.long_press_frames))
            .map(|e| ClassifiedPress {
                kind: e.kind,
                action: ButtonAction::ShortPress,
            });
        let longs = ButtonKind::ALL
            .into_iter()
            .filter(|kind| {
                is_long_press_tick(
                    timers.get(*kind).active_frames,
                    self.long_press_frames,
                    self.repeat,
                )
            })
            .map(|kind| ClassifiedPress {
                kind,
                action: ButtonAction::LongPress,
            });

        // A kind is either released or held on one tick, never both.
        for press in shorts.chain(longs) {
            if presses.push(press).is_err() {
                break;
            }
        }

        presses
    }
}
