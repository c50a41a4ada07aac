//! Typed document model for a decoded LISON image.
//!
//! Values are built once by the decoder and are read-only afterwards.
//! Ownership is strictly tree-shaped: `Image` owns its pens, brushes and
//! shapes, a `GroupShape` owns its content. The `pen` / `brush` fields on
//! curves and regions are plain indices into the image's arrays.

// ── geometry ──────────────────────────────────────────────────────────────

/// A point in image units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight-alpha RGBA color. Every channel lies in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[inline]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    #[inline]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }
}

// ── patterns ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MonochromePattern {
    pub color: Color,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearGradientPattern {
    pub point_1: Point,
    pub color_1: Color,
    pub point_2: Point,
    pub color_2: Color,
}

/// Two-circle radial gradient. Both radii are non-negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RadialGradientPattern {
    pub center_1: Point,
    pub radius_1: f64,
    pub color_1: Color,
    pub center_2: Point,
    pub radius_2: f64,
    pub color_2: Color,
}

/// Paint source shared by pens and brushes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Pattern {
    Monochrome(MonochromePattern),
    LinearGradient(LinearGradientPattern),
    RadialGradient(RadialGradientPattern),
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Monochrome(MonochromePattern::default())
    }
}

// ── pens & brushes ────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke descriptor. `width` is strictly positive, in image units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pen {
    pub pattern: Pattern,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// Fill descriptor.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Brush {
    pub pattern: Pattern,
}

// ── segments ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment {
    pub point_2: Point,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadraticBezierSegment {
    pub point_2: Point,
    pub point_3: Point,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CubicBezierSegment {
    pub point_2: Point,
    pub point_3: Point,
    pub point_4: Point,
}

/// One piece of a curve. The start point is implicit: it is the end of the
/// previous segment, or the curve's `start` for the first one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    QuadraticBezier(QuadraticBezierSegment),
    CubicBezier(CubicBezierSegment),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveData {
    pub start: Point,
    pub segments: Vec<Segment>,
}

/// One or more contours. Never empty once decoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionData {
    pub curves: Vec<CurveData>,
}

// ── shapes ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupShape {
    pub content: Vec<Shape>,
}

/// Open, stroke-only path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveShape {
    pub pen: usize,
    pub data: CurveData,
}

/// Closed contours, optionally filled and/or stroked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionShape {
    pub pen: Option<usize>,
    pub brush: Option<usize>,
    pub data: RegionData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Group(GroupShape),
    Curve(CurveShape),
    Region(RegionShape),
}

// ── image ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub width: f64,
    pub height: f64,
    pub unit_per_inch: f64,
    pub pens: Vec<Pen>,
    pub brushes: Vec<Brush>,
    pub shapes: Vec<Shape>,
}

impl Image {
    #[inline]
    pub fn pen(&self, index: usize) -> Option<&Pen> {
        self.pens.get(index)
    }

    #[inline]
    pub fn brush(&self, index: usize) -> Option<&Brush> {
        self.brushes.get(index)
    }

    /// All curves and regions in drawing order, with groups flattened away.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self.shapes.iter()] }
    }
}

/// Pre-order walk over curves and regions. See [`Image::leaves`].
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, Shape>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Shape;

    fn next(&mut self) -> Option<&'a Shape> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Shape::Group(group)) => self.stack.push(group.content.iter()),
                Some(shape) => return Some(shape),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(pen: usize) -> Shape {
        Shape::Curve(CurveShape { pen, data: CurveData::default() })
    }

    fn group(content: Vec<Shape>) -> Shape {
        Shape::Group(GroupShape { content })
    }

    fn pens_of<'a>(it: impl Iterator<Item = &'a Shape>) -> Vec<usize> {
        it.map(|s| match s {
            Shape::Curve(c) => c.pen,
            _ => panic!("expected only curves"),
        })
        .collect()
    }

    #[test]
    fn leaves_flatten_nested_groups_in_order() {
        let image = Image {
            shapes: vec![
                curve(0),
                group(vec![curve(1), group(vec![]), group(vec![curve(2), curve(3)])]),
                curve(4),
            ],
            ..Image::default()
        };
        assert_eq!(pens_of(image.leaves()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn leaves_of_empty_groups_are_empty() {
        let image = Image { shapes: vec![group(vec![group(vec![])])], ..Image::default() };
        assert_eq!(image.leaves().count(), 0);
    }
}
