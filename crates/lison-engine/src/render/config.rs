/// Tunable inputs of a render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Target resolution in pixels per inch.
    pub resolution: f64,
    /// Extra uniform scale on top of the resolution mapping.
    pub magnification: f64,
}

impl RenderConfig {
    pub const DEFAULT_RESOLUTION: f64 = 96.0;

    #[inline]
    pub fn new(resolution: f64, magnification: f64) -> Self {
        Self { resolution, magnification }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.resolution.is_finite()
            && self.resolution > 0.0
            && self.magnification.is_finite()
            && self.magnification > 0.0
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESOLUTION, 1.0)
    }
}
