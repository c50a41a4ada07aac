use lison_format::{CurveData, Segment};

use crate::coords::{Scaler, Vec2};

use super::Surface;

const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Degree-elevates the quadratic `p0, q1, q3` to the cubic control points
/// `[c2, c3, c4]` describing the same curve.
#[inline]
pub fn elevate_quadratic(p0: Vec2, q1: Vec2, q3: Vec2) -> [Vec2; 3] {
    [p0.lerp(q1, TWO_THIRDS), q3.lerp(q1, TWO_THIRDS), q3]
}

/// Emits one contour for `data`, optionally closed.
///
/// The cursor is tracked here rather than queried from the surface, so
/// quadratic elevation does not depend on surface state.
pub fn plot_curve<S: Surface + ?Sized>(
    surface: &mut S,
    scaler: &Scaler,
    data: &CurveData,
    closed: bool,
) {
    let mut cursor = scaler.point(data.start);
    surface.move_to(cursor);

    for segment in &data.segments {
        match segment {
            Segment::Line(s) => {
                cursor = scaler.point(s.point_2);
                surface.line_to(cursor);
            }
            Segment::QuadraticBezier(s) => {
                let [c2, c3, c4] =
                    elevate_quadratic(cursor, scaler.point(s.point_2), scaler.point(s.point_3));
                surface.curve_to(c2, c3, c4);
                cursor = c4;
            }
            Segment::CubicBezier(s) => {
                cursor = scaler.point(s.point_4);
                surface.curve_to(scaler.point(s.point_2), scaler.point(s.point_3), cursor);
            }
        }
    }

    if closed {
        surface.close_path();
    }
}
