//! Whole-document reference check, run after the model is fully built.

use crate::error::ParseFailure;
use crate::model::{Image, Shape};

/// Verifies every pen/brush index used by a curve or region, at any group
/// depth, points into the image's `pens` / `brushes`.
pub fn check_indices(image: &Image) -> Result<(), ParseFailure> {
    let resolves = |shape: &Shape| match shape {
        Shape::Group(_) => true,
        Shape::Curve(curve) => image.pen(curve.pen).is_some(),
        Shape::Region(region) => {
            region.pen.is_none_or(|i| image.pen(i).is_some())
                && region.brush.is_none_or(|i| image.brush(i).is_some())
        }
    };

    if image.leaves().all(resolves) { Ok(()) } else { Err(ParseFailure::BadShape) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Brush, CurveData, CurveShape, GroupShape, Pen, RegionData, RegionShape};

    fn image(pens: usize, brushes: usize, shapes: Vec<Shape>) -> Image {
        Image {
            width: 1.0,
            height: 1.0,
            unit_per_inch: 1.0,
            pens: vec![Pen::default(); pens],
            brushes: vec![Brush::default(); brushes],
            shapes,
        }
    }

    fn curve(pen: usize) -> Shape {
        Shape::Curve(CurveShape { pen, data: CurveData::default() })
    }

    fn region(pen: Option<usize>, brush: Option<usize>) -> Shape {
        Shape::Region(RegionShape {
            pen,
            brush,
            data: RegionData { curves: vec![CurveData::default()] },
        })
    }

    fn nest(shape: Shape, depth: usize) -> Shape {
        (0..depth).fold(shape, |inner, _| Shape::Group(GroupShape { content: vec![inner] }))
    }

    #[test]
    fn in_bounds_references_pass() {
        let im = image(2, 1, vec![curve(1), region(Some(0), Some(0)), region(None, None)]);
        assert_eq!(check_indices(&im), Ok(()));
    }

    #[test]
    fn index_equal_to_length_fails() {
        assert_eq!(check_indices(&image(2, 0, vec![curve(2)])), Err(ParseFailure::BadShape));
        assert_eq!(
            check_indices(&image(0, 1, vec![region(None, Some(1))])),
            Err(ParseFailure::BadShape)
        );
        assert_eq!(
            check_indices(&image(0, 1, vec![region(Some(0), Some(0))])),
            Err(ParseFailure::BadShape)
        );
    }

    #[test]
    fn deeply_nested_dangling_reference_fails() {
        for depth in [1, 2, 5] {
            let im = image(1, 1, vec![curve(0), nest(region(None, Some(3)), depth)]);
            assert_eq!(check_indices(&im), Err(ParseFailure::BadShape), "depth {depth}");
        }
    }

    #[test]
    fn empty_groups_pass() {
        let im = image(0, 0, vec![nest(Shape::Group(GroupShape::default()), 3)]);
        assert_eq!(check_indices(&im), Ok(()));
    }
}
