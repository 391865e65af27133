//! Button type definitions

use serde::{Deserialize, Serialize};

/// Physical cruise button kinds monitored by the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// Raise the set speed
    Accel,
    /// Lower the set speed
    Decel,
    /// Cancel cruise
    Cancel,
    /// Resume the previous set speed
    Resume,
    /// Set cruise at the current speed
    Set,
    /// Any other steering-wheel button the vehicle reports
    Other,
}

impl ButtonKind {
    /// Every kind, in tracking order.
    pub const ALL: [ButtonKind; 6] = [
        ButtonKind::Accel,
        ButtonKind::Decel,
        ButtonKind::Cancel,
        ButtonKind::Resume,
        ButtonKind::Set,
        ButtonKind::Other,
    ];

    /// Kinds that change the set speed.
    pub fn adjusts_speed(self) -> bool {
        matches!(self, ButtonKind::Accel | ButtonKind::Decel)
    }

    /// Direction of a set-speed change: `+1` for accel, `-1` for decel.
    pub fn speed_sign(self) -> Option<f64> {
        match self {
            ButtonKind::Accel => Some(1.0),
            ButtonKind::Decel => Some(-1.0),
            _ => None,
        }
    }
}

/// Edge event for one button.
///
/// `held_frames` is 0 on a press and the number of ticks the button was
/// held on a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    /// Button that changed
    pub kind: ButtonKind,
    /// True on a press edge, false on a release edge
    pub pressed: bool,
    /// Ticks held, reported on release
    pub held_frames: u32,
}

impl ButtonEvent {
    /// Press edge.
    pub fn press(kind: ButtonKind) -> Self {
        Self {
            kind,
            pressed: true,
            held_frames: 0,
        }
    }

    /// Release edge after `held_frames` ticks down.
    pub fn release(kind: ButtonKind, held_frames: u32) -> Self {
        Self {
            kind,
            pressed: false,
            held_frames,
        }
    }
}

/// Hold timer for one button. 0 while released, 1 on the press tick, then
/// incremented every tick the button stays down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonTimer {
    /// Ticks the button has been held, including the press tick
    pub active_frames: u32,
}

impl ButtonTimer {
    /// Button is currently down.
    pub fn is_held(&self) -> bool {
        self.active_frames > 0
    }
}

/// System state captured on the press edge and held until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonChangeSnapshot {
    /// Vehicle was at standstill on the press tick
    pub standstill_at_press: bool,
    /// Control was enabled on the press tick
    pub enabled_at_press: bool,
}

/// One value per button kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerButton<T> {
    /// Accel button
    pub accel: T,
    /// Decel button
    pub decel: T,
    /// Cancel button
    pub cancel: T,
    /// Resume button
    pub resume: T,
    /// Set button
    pub set: T,
    /// Other button
    pub other: T,
}

impl<T> PerButton<T> {
    /// Build one value per kind.
    ///
    /// # Example
    ///
    /// ```
    /// use drivecore_buttons::{ButtonKind, PerButton};
    ///
    /// let signs = PerButton::from_fn(|kind| kind.speed_sign().unwrap_or(0.0));
    /// assert_eq!(*signs.get(ButtonKind::Decel), -1.0);
    /// ```
    pub fn from_fn(mut f: impl FnMut(ButtonKind) -> T) -> Self {
        Self {
            accel: f(ButtonKind::Accel),
            decel: f(ButtonKind::Decel),
            cancel: f(ButtonKind::Cancel),
            resume: f(ButtonKind::Resume),
            set: f(ButtonKind::Set),
            other: f(ButtonKind::Other),
        }
    }

    /// Value for `kind`.
    pub fn get(&self, kind: ButtonKind) -> &T {
        match kind {
            ButtonKind::Accel => &self.accel,
            ButtonKind::Decel => &self.decel,
            ButtonKind::Cancel => &self.cancel,
            ButtonKind::Resume => &self.resume,
            ButtonKind::Set => &self.set,
            ButtonKind::Other => &self.other,
        }
    }

    /// Mutable value for `kind`.
    pub fn get_mut(&mut self, kind: ButtonKind) -> &mut T {
        match kind {
            ButtonKind::Accel => &mut self.accel,
            ButtonKind::Decel => &mut self.decel,
            ButtonKind::Cancel => &mut self.cancel,
            ButtonKind::Resume => &mut self.resume,
            ButtonKind::Set => &mut self.set,
            ButtonKind::Other => &mut self.other,
        }
    }
}

/// Per-tick button sample. `None` marks a missing reading, which the
/// debouncer treats as unchanged from the previous tick.
pub type ButtonSample = PerButton<Option<bool>>;

impl PerButton<Option<bool>> {
    /// A complete sample where exactly the listed kinds are pressed.
    pub fn with_pressed(pressed: &[ButtonKind]) -> Self {
        Self::from_fn(|kind| Some(pressed.contains(&kind)))
    }

    /// A complete sample with every button released.
    pub fn released() -> Self {
        Self::with_pressed(&[])
    }

    /// A sample where every reading is missing.
    pub fn missing() -> Self {
        Self::from_fn(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_sign() {
        assert_eq!(ButtonKind::Accel.speed_sign(), Some(1.0));
        assert_eq!(ButtonKind::Decel.speed_sign(), Some(-1.0));
        assert_eq!(ButtonKind::Cancel.speed_sign(), None);
        assert!(ButtonKind::Accel.adjusts_speed());
        assert!(!ButtonKind::Resume.adjusts_speed());
    }

    #[test]
    fn test_per_button_get_mut() {
        let mut timers = PerButton::<ButtonTimer>::default();
        timers.get_mut(ButtonKind::Decel).active_frames = 7;
        assert_eq!(timers.decel.active_frames, 7);
        assert_eq!(timers.get(ButtonKind::Accel).active_frames, 0);
    }

    #[test]
    fn test_sample_with_pressed() {
        let sample = ButtonSample::with_pressed(&[ButtonKind::Accel, ButtonKind::Set]);
        assert_eq!(sample.accel, Some(true));
        assert_eq!(sample.set, Some(true));
        assert_eq!(sample.decel, Some(false));
        assert_eq!(ButtonSample::missing().resume, None);
    }

    #[test]
    fn test_event_constructors() {
        let press = ButtonEvent::press(ButtonKind::Resume);
        assert!(press.pressed);
        assert_eq!(press.held_frames, 0);

        let release = ButtonEvent::release(ButtonKind::Resume, 12);
        assert!(!release.pressed);
        assert_eq!(release.held_frames, 12);
    }

    #[test]
    fn test_button_kind_serde() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&ButtonKind::Decel)?;
        assert_eq!(json, "\"decel\"");
        let kind: ButtonKind = serde_json::from_str("\"accel\"")?;
        assert_eq!(kind, ButtonKind::Accel);
        Ok(())
    }
}
