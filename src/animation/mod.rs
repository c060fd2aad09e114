//! Frame-driven animation primitives used by the settle transitions.
//!
//! The host owns the frame clock. Every animation here is advanced by an
//! explicit elapsed time in milliseconds, never by reading a wall clock, so a
//! replayed pointer stream always produces the same sequence of offsets.

mod animatable;
mod timing;
mod tween;

pub use animatable::Animatable;
pub use timing::TimingFunction;
pub use tween::{AdvanceResult, Tween};

/// Duration of a user or programmatic expand/shrink settle.
pub const SETTLE_DURATION_MS: f32 = 240.0;
/// Duration of the programmatic content pane slide-out.
pub const HIDE_CONTENT_DURATION_MS: f32 = 220.0;
/// Duration of the programmatic content pane slide-in.
pub const SHOW_CONTENT_DURATION_MS: f32 = 180.0;
/// Duration of the non-animated start-up snap.
pub const SNAP_DURATION_MS: f32 = 0.0;

/// Configuration for how an offset travels to its target
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Linear transition over `duration_ms`.
    pub fn linear(duration_ms: f32) -> Self {
        Self::new(duration_ms, TimingFunction::Linear)
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// True when the transition completes in the same call that starts it.
    pub fn is_instant(&self) -> bool {
        self.duration_ms <= 0.0
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(SETTLE_DURATION_MS, TimingFunction::AccelerateDecelerate)
    }
}
