//! Timing functions (easing curves) for settle animations.
//!
//! - [`TimingFunction::Linear`] - Constant speed, used for the content pane slides
//! - [`TimingFunction::AccelerateDecelerate`] - Cosine ease, the default settle curve
//! - [`TimingFunction::EaseIn`] / [`TimingFunction::EaseOut`] / [`TimingFunction::EaseInOut`]
//! - [`TimingFunction::Custom`] - User-defined function

use std::f32::consts::PI;
use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Cosine curve: slow start, fast middle, slow end
    AccelerateDecelerate,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::AccelerateDecelerate => write!(f, "AccelerateDecelerate"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}
