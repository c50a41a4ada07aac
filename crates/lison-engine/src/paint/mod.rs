//! Paint model handed to drawing surfaces.
//!
//! Scope:
//! - straight-alpha color
//! - paint sources (solid, two-stop linear and radial gradients)
//! - resolution of image patterns into device-space paint
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient};

use lison_format::Pattern;

use crate::coords::Scaler;

/// Paint source for filling or stroking the current path.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    /// Resolves an image pattern into device space: positions and radii go
    /// through `scaler`, the first color sits at offset 0 and the second at 1.
    pub fn from_pattern(pattern: &Pattern, scaler: &Scaler) -> Self {
        match pattern {
            Pattern::Monochrome(p) => Paint::Solid(p.color.into()),
            Pattern::LinearGradient(p) => Paint::LinearGradient(LinearGradient::two_stop(
                scaler.point(p.point_1),
                p.color_1.into(),
                scaler.point(p.point_2),
                p.color_2.into(),
            )),
            Pattern::RadialGradient(p) => Paint::RadialGradient(RadialGradient::two_stop(
                (scaler.point(p.center_1), scaler.length(p.radius_1), p.color_1.into()),
                (scaler.point(p.center_2), scaler.length(p.radius_2), p.color_2.into()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use lison_format::{
        LinearGradientPattern, MonochromePattern, Point, RadialGradientPattern,
    };

    fn c(r: f64, g: f64, b: f64, a: f64) -> lison_format::Color {
        lison_format::Color::rgba(r, g, b, a)
    }

    #[test]
    fn monochrome_is_solid_and_unscaled() {
        let pattern = Pattern::Monochrome(MonochromePattern { color: c(0.2, 0.4, 0.6, 0.8) });
        let paint = Paint::from_pattern(&pattern, &Scaler::new(300.0, 72.0, 3.0));
        assert_eq!(paint, Paint::Solid(Color::new(0.2, 0.4, 0.6, 0.8)));
    }

    #[test]
    fn linear_gradient_points_are_scaled() {
        let pattern = Pattern::LinearGradient(LinearGradientPattern {
            point_1: Point::new(1.0, 2.0),
            color_1: c(1.0, 0.0, 0.0, 1.0),
            point_2: Point::new(3.0, 4.0),
            color_2: c(0.0, 0.0, 1.0, 1.0),
        });
        let Paint::LinearGradient(g) = Paint::from_pattern(&pattern, &Scaler::new(144.0, 72.0, 1.0))
        else {
            panic!("expected a linear gradient");
        };
        assert_eq!(g.start, Vec2::new(2.0, 4.0));
        assert_eq!(g.end, Vec2::new(6.0, 8.0));
        assert_eq!(g.stops[0], ColorStop::new(0.0, Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(g.stops[1], ColorStop::new(1.0, Color::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn radial_gradient_radii_are_scaled() {
        let pattern = Pattern::RadialGradient(RadialGradientPattern {
            center_1: Point::new(5.0, 5.0),
            radius_1: 0.0,
            color_1: c(1.0, 1.0, 1.0, 1.0),
            center_2: Point::new(5.0, 6.0),
            radius_2: 2.5,
            color_2: c(0.0, 0.0, 0.0, 0.0),
        });
        let Paint::RadialGradient(g) = Paint::from_pattern(&pattern, &Scaler::new(72.0, 72.0, 2.0))
        else {
            panic!("expected a radial gradient");
        };
        assert_eq!((g.start, g.start_radius), (Vec2::new(10.0, 10.0), 0.0));
        assert_eq!((g.end, g.end_radius), (Vec2::new(10.0, 12.0), 5.0));
        assert_eq!(g.stops.len(), 2);
    }
}
