use lison_format::{Image, Point};

use crate::render::RenderConfig;

use super::Vec2;

/// Uniform image-units to device-pixels mapping.
///
/// `factor = resolution / unit_per_inch * magnification`. Applied to both
/// coordinates of every point and to every scalar length (pen widths,
/// gradient radii). No rotation, translation or non-uniform scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scaler {
    factor: f64,
}

impl Scaler {
    #[inline]
    pub fn new(resolution: f64, unit_per_inch: f64, magnification: f64) -> Self {
        Self { factor: resolution / unit_per_inch * magnification }
    }

    #[inline]
    pub fn for_image(image: &Image, config: &RenderConfig) -> Self {
        Self::new(config.resolution, image.unit_per_inch, config.magnification)
    }

    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline]
    pub fn length(&self, value: f64) -> f64 {
        value * self.factor
    }

    #[inline]
    pub fn point(&self, p: Point) -> Vec2 {
        Vec2::from(p) * self.factor
    }
}
