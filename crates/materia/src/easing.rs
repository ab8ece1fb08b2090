//! Easing curves and interpolation helpers used by the animation driver.

use crate::color::Color;
use std::f32::consts::PI;

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Sinusoidal ease in-out: slow start and end, fast middle
///
/// `t - sin(2πt) / 2π` has a non-negative derivative on [0, 1] and keeps the
/// fixed points 0, 0.5 and 1.
pub fn ease_in_out(t: f32) -> f32 {
    t - (t * 2.0 * PI).sin() / (2.0 * PI)
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Stays at zero until the kickoff point, then eases out to one
pub fn custom_quadratic(t: f32) -> f32 {
    const KICKOFF: f32 = 0.6;
    1.0 - ((t.max(KICKOFF) - KICKOFF) * PI / (2.0 - 2.0 * KICKOFF)).cos()
}

/// Which easing curve an animation applies when its progress is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    #[default]
    Linear,
    EaseInOut,
    EaseOut,
    CustomQuadratic,
}

impl AnimationType {
    pub fn easing(self) -> EasingFn {
        match self {
            AnimationType::Linear => linear,
            AnimationType::EaseInOut => ease_in_out,
            AnimationType::EaseOut => ease_out,
            AnimationType::CustomQuadratic => custom_quadratic,
        }
    }

    /// Apply the curve to a linear progress value, clamping both ends
    pub fn apply(self, t: f32) -> f32 {
        (self.easing())(t.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two colors
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}
