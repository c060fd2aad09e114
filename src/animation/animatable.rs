/// Trait for values a [`Tween`](super::Tween) can interpolate
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        // Pin the endpoints so a finished settle lands exactly on its boundary.
        if t <= 0.0 {
            *from
        } else if t >= 1.0 {
            *to
        } else {
            from + (to - from) * t
        }
    }
}
