use std::path::Path;

use anyhow::{Context, Result};
use lison_format::{LineCap, LineJoin};
use resvg::tiny_skia;

use crate::coords::Vec2;
use crate::paint::{Color, ColorStop, LinearGradient, Paint, RadialGradient};
use crate::render::{CompositeOp, FillRule, Surface};

/// Path operation buffered until the next fill or stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo(Vec2, Vec2, Vec2),
    Close,
}

/// [`Surface`] rasterizing into an RGBA pixmap.
///
/// The pixmap starts fully transparent. Path operations are buffered and
/// replayed into a fresh `PathBuilder` on every fill or stroke, which lets
/// `fill_preserve` keep the path for a following stroke.
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,

    /// Current path.
    ops: Vec<PathOp>,
    /// Whether a contour is open. Cleared by `new_sub_path` and `new_path`;
    /// the next drawing op then starts a new contour at its first point.
    has_current_point: bool,

    source: Paint,
    blend_mode: tiny_skia::BlendMode,
    fill_rule: tiny_skia::FillRule,
    stroke: tiny_skia::Stroke,
}

impl PixmapSurface {
    /// Creates a transparent `width` x `height` target.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size");

        let pixmap = tiny_skia::Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate a {width}x{height} pixmap"))?;

        Ok(Self {
            pixmap,
            ops: Vec::new(),
            has_current_point: false,
            source: Paint::Solid(Color::new(0.0, 0.0, 0.0, 1.0)),
            blend_mode: tiny_skia::BlendMode::SourceOver,
            fill_rule: tiny_skia::FillRule::EvenOdd,
            stroke: tiny_skia::Stroke::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)`. `None` outside the
    /// pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().context("failed to encode PNG")
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write '{}'", path.display()))
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Starts a contour at `p` when none is open, as a drawing op with no
    /// current point would.
    fn ensure_current_point(&mut self, p: Vec2) {
        if !self.has_current_point {
            self.ops.push(PathOp::MoveTo(p));
            self.has_current_point = true;
        }
    }

    /// Replays the buffered ops. `None` when the path has no drawable extent.
    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                PathOp::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                PathOp::CurveTo(c1, c2, p) => pb.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                ),
                PathOp::Close => pb.close(),
            }
        }
        pb.finish()
    }

    fn paint(&self) -> tiny_skia::Paint<'static> {
        tiny_skia::Paint {
            shader: shader(&self.source),
            blend_mode: self.blend_mode,
            anti_alias: true,
            ..tiny_skia::Paint::default()
        }
    }

    fn clear_path(&mut self) {
        self.ops.clear();
        self.has_current_point = false;
    }
}

impl Surface for PixmapSurface {
    fn set_operator(&mut self, op: CompositeOp) {
        self.blend_mode = match op {
            CompositeOp::SourceOver => tiny_skia::BlendMode::SourceOver,
        };
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.fill_rule = match rule {
            FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
        };
    }

    fn move_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::MoveTo(p));
        self.has_current_point = true;
    }

    fn line_to(&mut self, p: Vec2) {
        self.ensure_current_point(p);
        self.ops.push(PathOp::LineTo(p));
    }

    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ensure_current_point(c1);
        self.ops.push(PathOp::CurveTo(c1, c2, end));
    }

    fn close_path(&mut self) {
        if self.has_current_point {
            self.ops.push(PathOp::Close);
        }
    }

    fn new_sub_path(&mut self) {
        self.has_current_point = false;
    }

    fn new_path(&mut self) {
        self.clear_path();
    }

    fn set_source_color(&mut self, color: Color) {
        self.source = Paint::Solid(color);
    }

    fn set_source_linear(&mut self, gradient: &LinearGradient) {
        self.source = Paint::LinearGradient(gradient.clone());
    }

    fn set_source_radial(&mut self, gradient: &RadialGradient) {
        self.source = Paint::RadialGradient(gradient.clone());
    }

    fn set_line_width(&mut self, width: f64) {
        self.stroke.width = width as f32;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.stroke.line_cap = match cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        };
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.stroke.line_join = match join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        };
    }

    fn fill_preserve(&mut self) {
        let Some(path) = self.build_path() else {
            log::trace!("fill: empty path skipped");
            return;
        };
        let paint = self.paint();
        self.pixmap
            .fill_path(&path, &paint, self.fill_rule, tiny_skia::Transform::identity(), None);
    }

    fn stroke(&mut self) {
        if let Some(path) = self.build_path() {
            let paint = self.paint();
            self.pixmap.stroke_path(
                &path,
                &paint,
                &self.stroke,
                tiny_skia::Transform::identity(),
                None,
            );
        } else {
            log::trace!("stroke: empty path skipped");
        }
        self.clear_path();
    }
}

// ── paint mapping ─────────────────────────────────────────────────────────

fn color(c: Color) -> tiny_skia::Color {
    let channel = |v: f64| v.clamp(0.0, 1.0) as f32;
    tiny_skia::Color::from_rgba(channel(c.r), channel(c.g), channel(c.b), channel(c.a))
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

#[inline]
fn point(p: Vec2) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

fn stops(stops: &[ColorStop]) -> Vec<tiny_skia::GradientStop> {
    stops
        .iter()
        .map(|s| tiny_skia::GradientStop::new(s.t as f32, color(s.color)))
        .collect()
}

/// The color a degenerate gradient collapses to.
fn end_color(stops: &[ColorStop]) -> tiny_skia::Shader<'static> {
    let c = stops.last().map_or(Color::transparent(), |s| s.color);
    tiny_skia::Shader::SolidColor(color(c))
}

fn shader(paint: &Paint) -> tiny_skia::Shader<'static> {
    match paint {
        Paint::Solid(c) => tiny_skia::Shader::SolidColor(color(*c)),
        Paint::LinearGradient(g) if g.is_valid() => tiny_skia::LinearGradient::new(
            point(g.start),
            point(g.end),
            stops(&g.stops),
            tiny_skia::SpreadMode::Pad,
            tiny_skia::Transform::identity(),
        )
        .unwrap_or_else(|| {
            log::debug!("degenerate linear gradient; using end color");
            end_color(&g.stops)
        }),
        Paint::RadialGradient(g) if g.is_valid() => radial_shader(g).unwrap_or_else(|| {
            log::debug!("degenerate radial gradient; using end color");
            end_color(&g.stops)
        }),
        Paint::LinearGradient(LinearGradient { stops: invalid, .. })
        | Paint::RadialGradient(RadialGradient { stops: invalid, .. }) => {
            log::debug!("invalid gradient; using end color");
            end_color(invalid)
        }
    }
}

/// Maps a two-circle gradient onto tiny-skia's radial shader, whose start
/// circle always has radius 0.
///
/// Concentric circles are exact: one circle of the larger radius, with each
/// stop moved to `r / r_max` where `r` is the radius it sits on. A zero start
/// radius is exact too. Any other start radius is dropped.
fn radial_shader(g: &RadialGradient) -> Option<tiny_skia::Shader<'static>> {
    let (r1, r2) = (g.start_radius, g.end_radius);

    if g.start == g.end {
        let outer = r1.max(r2);
        let mut mapped: Vec<_> = g
            .stops
            .iter()
            .map(|s| {
                let r = r1 + s.t * (r2 - r1);
                tiny_skia::GradientStop::new((r / outer) as f32, color(s.color))
            })
            .collect();
        if r1 > r2 {
            mapped.reverse();
        }
        return tiny_skia::RadialGradient::new(
            point(g.end),
            point(g.end),
            outer as f32,
            mapped,
            tiny_skia::SpreadMode::Pad,
            tiny_skia::Transform::identity(),
        );
    }

    if r1 > 0.0 {
        log::debug!("radial gradient start radius {r1} not supported off-center; using 0");
    }
    tiny_skia::RadialGradient::new(
        point(g.start),
        point(g.end),
        r2 as f32,
        stops(&g.stops),
        tiny_skia::SpreadMode::Pad,
        tiny_skia::Transform::identity(),
    )
}
