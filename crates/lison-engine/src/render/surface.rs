use lison_format::{LineCap, LineJoin};

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, Paint, RadialGradient};

/// How new paint combines with what is already on the surface.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CompositeOp {
    #[default]
    SourceOver,
}

/// Which points lie inside a path with several contours.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FillRule {
    #[default]
    EvenOdd,
}

/// A stateful 2D drawing target.
///
/// The surface owns one current path and one current paint source, both
/// mutated in place. Callers issue calls in paint order; later fills and
/// strokes may cover earlier ones.
///
/// Path contract:
/// - `move_to` begins a new contour at a point without drawing
/// - `close_path` joins the contour back to its first point
/// - `new_sub_path` ends the current contour without closing it
/// - `new_path` discards the whole current path
/// - `fill_preserve` fills and keeps the path; `stroke` strokes and then
///   discards it
///
/// All coordinates and lengths are in device pixels.
pub trait Surface {
    fn set_operator(&mut self, op: CompositeOp);
    fn set_fill_rule(&mut self, rule: FillRule);

    // ── path ──────────────────────────────────────────────────────────────

    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
    fn close_path(&mut self);
    fn new_sub_path(&mut self);
    fn new_path(&mut self);

    // ── paint source ──────────────────────────────────────────────────────

    fn set_source_color(&mut self, color: Color);
    fn set_source_linear(&mut self, gradient: &LinearGradient);
    fn set_source_radial(&mut self, gradient: &RadialGradient);

    // ── stroke parameters ─────────────────────────────────────────────────

    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);

    // ── painting ──────────────────────────────────────────────────────────

    fn fill_preserve(&mut self);
    fn stroke(&mut self);

    /// Dispatches a resolved paint to the matching source setter.
    fn set_source(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.set_source_color(*c),
            Paint::LinearGradient(g) => self.set_source_linear(g),
            Paint::RadialGradient(g) => self.set_source_radial(g),
        }
    }
}
