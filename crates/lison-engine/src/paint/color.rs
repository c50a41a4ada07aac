/// Straight-alpha RGBA color handed to drawing surfaces.
///
/// Channels are expected in `[0, 1]`; the decoder guarantees this for colors
/// coming from an image.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

}

impl From<lison_format::Color> for Color {
    #[inline]
    fn from(c: lison_format::Color) -> Self {
        Self::new(c.red, c.green, c.blue, c.alpha)
    }
}
