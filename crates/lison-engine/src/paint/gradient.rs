use crate::coords::Vec2;

use super::Color;

/// A single gradient stop. `t` is the offset along the gradient, in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f64, color: Color) -> Self {
        Self { t, color }
    }
}

/// Stops for a gradient running from `from` at offset 0 to `to` at offset 1.
#[inline]
fn two_stops(from: Color, to: Color) -> Vec<ColorStop> {
    vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)]
}

/// Linear gradient in device pixels. Outside `[start, end]` the edge stops
/// extend (pad).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    pub fn two_stop(start: Vec2, from: Color, end: Vec2, to: Color) -> Self {
        Self::new(start, end, two_stops(from, to))
    }

    /// Returns true when the gradient has a usable axis and at least two
    /// finite stops.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.start != self.end
    }
}

/// Two-circle radial gradient in device pixels: the start circle maps to
/// offset 0, the end circle to offset 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start: Vec2,
    pub start_radius: f64,
    pub end: Vec2,
    pub end_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn two_stop(
        (start, start_radius, from): (Vec2, f64, Color),
        (end, end_radius, to): (Vec2, f64, Color),
    ) -> Self {
        Self { start, start_radius, end, end_radius, stops: two_stops(from, to) }
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start_radius >= 0.0
            && self.end_radius >= 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && (self.start != self.end || self.start_radius != self.end_radius)
    }
}
