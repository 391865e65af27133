//! Frame-by-frame button press scripts.
//!
//! A [`ButtonScript`] expands a short description such as "idle 2 frames,
//! hold accel for 30, release" into the per-tick [`ButtonSample`]s the
//! debouncer consumes.

use drivecore_buttons::{ButtonKind, ButtonSample};

/// Builder for a sequence of button samples, one per control tick.
///
/// # Example
///
/// ```rust
/// use drivecore_buttons::ButtonKind;
/// use drivecore_test_helpers::ButtonScript;
///
/// let script = ButtonScript::new().idle(1).hold(ButtonKind::Accel, 3).idle(1);
/// assert_eq!(script.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ButtonScript {
    samples: Vec<ButtonSample>,
}

impl ButtonScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All buttons released for `frames` ticks.
    pub fn idle(self, frames: usize) -> Self {
        self.repeat(ButtonSample::released(), frames)
    }

    /// One button held for `frames` ticks.
    pub fn hold(self, kind: ButtonKind, frames: usize) -> Self {
        self.hold_many(&[kind], frames)
    }

    /// Several buttons held together for `frames` ticks.
    pub fn hold_many(self, kinds: &[ButtonKind], frames: usize) -> Self {
        self.repeat(ButtonSample::with_pressed(kinds), frames)
    }

    /// Every reading missing for `frames` ticks.
    pub fn missing(self, frames: usize) -> Self {
        self.repeat(ButtonSample::missing(), frames)
    }

    /// Append an arbitrary sample.
    pub fn then(mut self, sample: ButtonSample) -> Self {
        self.samples.push(sample);
        self
    }

    fn repeat(mut self, sample: ButtonSample, frames: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(sample, frames));
        self
    }

    pub fn samples(&self) -> &[ButtonSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ButtonSample> {
        self.samples.iter()
    }
}

impl IntoIterator for ButtonScript {
    type Item = ButtonSample;
    type IntoIter = std::vec::IntoIter<ButtonSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a ButtonScript {
    type Item = &'a ButtonSample;
    type IntoIter = std::slice::Iter<'a, ButtonSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
