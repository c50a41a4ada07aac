use lison_format::{LineCap, LineJoin};

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, RadialGradient};
use crate::render::{CompositeOp, FillRule, Surface};

use super::SurfaceCall;

/// Append-only recording of surface calls.
///
/// `push()` is O(1). Calls keep their issue order; nothing is sorted or
/// merged.
#[derive(Debug, Default)]
pub struct CallList {
    calls: Vec<SurfaceCall>,
}

impl CallList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    #[inline]
    pub fn push(&mut self, call: SurfaceCall) {
        self.calls.push(call);
    }

    /// Returns calls in issue order.
    #[inline]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    #[inline]
    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }
}

impl Surface for CallList {
    fn set_operator(&mut self, op: CompositeOp) {
        self.push(SurfaceCall::SetOperator(op));
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.push(SurfaceCall::SetFillRule(rule));
    }

    fn move_to(&mut self, p: Vec2) {
        self.push(SurfaceCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.push(SurfaceCall::LineTo(p));
    }

    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.push(SurfaceCall::CurveTo(c1, c2, end));
    }

    fn close_path(&mut self) {
        self.push(SurfaceCall::ClosePath);
    }

    fn new_sub_path(&mut self) {
        self.push(SurfaceCall::NewSubPath);
    }

    fn new_path(&mut self) {
        self.push(SurfaceCall::NewPath);
    }

    fn set_source_color(&mut self, color: Color) {
        self.push(SurfaceCall::SetSourceColor(color));
    }

    fn set_source_linear(&mut self, gradient: &LinearGradient) {
        self.push(SurfaceCall::SetSourceLinear(gradient.clone()));
    }

    fn set_source_radial(&mut self, gradient: &RadialGradient) {
        self.push(SurfaceCall::SetSourceRadial(gradient.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(SurfaceCall::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.push(SurfaceCall::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.push(SurfaceCall::SetLineJoin(join));
    }

    fn fill_preserve(&mut self) {
        self.push(SurfaceCall::FillPreserve);
    }

    fn stroke(&mut self) {
        self.push(SurfaceCall::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Paint;

    #[test]
    fn records_in_issue_order() {
        let mut list = CallList::new();
        list.move_to(Vec2::new(1.0, 2.0));
        list.line_to(Vec2::new(3.0, 4.0));
        list.stroke();
        assert_eq!(
            list.calls(),
            &[
                SurfaceCall::MoveTo(Vec2::new(1.0, 2.0)),
                SurfaceCall::LineTo(Vec2::new(3.0, 4.0)),
                SurfaceCall::Stroke,
            ]
        );
    }

    #[test]
    fn set_source_dispatches_on_paint_kind() {
        let mut list = CallList::new();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        list.set_source(&Paint::Solid(red));
        let g = LinearGradient::two_stop(Vec2::zero(), red, Vec2::new(1.0, 0.0), red);
        list.set_source(&Paint::LinearGradient(g.clone()));
        assert_eq!(
            list.calls(),
            &[SurfaceCall::SetSourceColor(red), SurfaceCall::SetSourceLinear(g)]
        );
    }

    #[test]
    fn clear_empties() {
        let mut list = CallList::new();
        list.new_path();
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
