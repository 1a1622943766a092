use crate::foundation::color::Color;

/// Eased progress at which categorical attributes switch to their next value.
pub const MIDPOINT_SNAP: f64 = 0.5;

/// Interpolation contract for animatable attribute types.
///
/// Implementations return `a` exactly for `t <= 0` and `b` exactly for `t >= 1`.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with eased factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t <= 0.0 {
            *a
        } else if t >= 1.0 {
            *b
        } else {
            a + (b - a) * t
        }
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::lerp_linear(*a, *b, t)
    }
}

/// Midpoint snap for non-interpolatable values: `a` before [`MIDPOINT_SNAP`], `b` from it on.
pub fn snap<T: Clone>(a: &T, b: &T, t: f64) -> T {
    if t >= MIDPOINT_SNAP {
        b.clone()
    } else {
        a.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
