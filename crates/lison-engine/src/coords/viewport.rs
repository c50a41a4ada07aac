use lison_format::Image;

use super::Scaler;

/// Image extent in device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn for_image(image: &Image, scaler: &Scaler) -> Self {
        Self::new(scaler.length(image.width), scaler.length(image.height))
    }

    /// Whole-pixel size of a raster target covering the viewport.
    ///
    /// `None` when either side rounds to zero or exceeds `i32::MAX`.
    pub fn pixel_size(self) -> Option<(u32, u32)> {
        let side = |v: f64| {
            let v = v.round();
            (v >= 1.0 && v <= f64::from(i32::MAX)).then_some(v as u32)
        };
        Some((side(self.width)?, side(self.height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_rounds_to_nearest() {
        assert_eq!(Viewport::new(99.6, 10.4).pixel_size(), Some((100, 10)));
    }

    #[test]
    fn pixel_size_rejects_degenerate_sides() {
        assert_eq!(Viewport::new(0.4, 10.0).pixel_size(), None);
        assert_eq!(Viewport::new(10.0, 3.0e10).pixel_size(), None);
        assert_eq!(Viewport::new(f64::NAN, 10.0).pixel_size(), None);
    }

    #[test]
    fn for_image_scales_both_sides() {
        let image = Image { width: 100.0, height: 50.0, unit_per_inch: 72.0, ..Image::default() };
        let vp = Viewport::for_image(&image, &Scaler::new(144.0, 72.0, 1.0));
        assert_eq!(vp, Viewport::new(200.0, 100.0));
    }
}
