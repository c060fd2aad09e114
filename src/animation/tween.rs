use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// A single start-to-target interpolation advanced by host frame time.
#[derive(Debug, Clone)]
pub struct Tween<T: Animatable> {
    /// Value when animation started
    start: T,
    /// Value the animation lands on
    target: T,
    /// Current interpolated value
    current: T,
    /// Milliseconds advanced so far
    elapsed_ms: f32,
    transition: Transition,
}

impl<T: Animatable> Tween<T> {
    pub fn new(start: T, target: T, transition: Transition) -> Self {
        let mut tween = Self {
            current: start.clone(),
            start,
            target,
            elapsed_ms: 0.0,
            transition,
        };
        if tween.transition.is_instant() {
            tween.current = tween.target.clone();
        }
        tween
    }

    /// Advance by `dt_ms` milliseconds of frame time.
    pub fn advance(&mut self, dt_ms: f32) -> AdvanceResult<T> {
        if self.is_finished() {
            return AdvanceResult::NoChange;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        let new_value = if self.is_finished() {
            self.target.clone()
        } else {
            let t = self.elapsed_ms / self.transition.duration_ms;
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) -> T {
        self.elapsed_ms = self.transition.duration_ms.max(0.0);
        self.current = self.target.clone();
        self.current.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.transition.is_instant() || self.elapsed_ms >= self.transition.duration_ms
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn start(&self) -> &T {
        &self.start
    }
}
