use lison_format::{Brush, CurveShape, Image, Pen, RegionShape, Shape};

use crate::coords::Scaler;
use crate::paint::Paint;

use super::path::plot_curve;
use super::{CompositeOp, FillRule, RenderConfig, Surface};

/// Issues the drawing calls for `image` on `surface`.
///
/// Sets source-over compositing and the even-odd fill rule once for the
/// pass, then walks the shape tree in pre-order. Pens and brushes are
/// resolved per leaf; groups carry no drawing state.
///
/// `image` must come from the decoder: every pen and brush index is assumed
/// to be in bounds. Shapes whose index is not are skipped with a warning.
pub fn render<S: Surface + ?Sized>(surface: &mut S, image: &Image, config: RenderConfig) {
    let scaler = Scaler::for_image(image, &config);
    log::debug!(
        "render: {}x{} units at {} ppi x{} (factor {}), {} top-level shapes",
        image.width,
        image.height,
        config.resolution,
        config.magnification,
        scaler.factor(),
        image.shapes.len(),
    );

    surface.set_operator(CompositeOp::SourceOver);
    surface.set_fill_rule(FillRule::EvenOdd);
    surface.new_path();

    let mut walk = Walk { surface, image, scaler };
    for shape in &image.shapes {
        walk.shape(shape);
    }
}

struct Walk<'a, S: ?Sized> {
    surface: &'a mut S,
    image: &'a Image,
    scaler: Scaler,
}

impl<S: Surface + ?Sized> Walk<'_, S> {
    fn shape(&mut self, shape: &Shape) {
        match shape {
            Shape::Group(group) => {
                for child in &group.content {
                    self.shape(child);
                }
            }
            Shape::Curve(curve) => self.curve(curve),
            Shape::Region(region) => self.region(region),
        }
    }

    fn curve(&mut self, curve: &CurveShape) {
        let image = self.image;
        let Some(pen) = image.pen(curve.pen) else {
            log::warn!("render: curve references missing pen {}", curve.pen);
            return;
        };
        plot_curve(self.surface, &self.scaler, &curve.data, false);
        self.apply_pen(pen);
        self.surface.stroke();
    }

    fn region(&mut self, region: &RegionShape) {
        let image = self.image;
        let pen = region.pen.map(|i| image.pen(i).ok_or(("pen", i))).transpose();
        let brush = region.brush.map(|i| image.brush(i).ok_or(("brush", i))).transpose();
        let (pen, brush) = match (pen, brush) {
            (Ok(pen), Ok(brush)) => (pen, brush),
            (Err((kind, i)), _) | (_, Err((kind, i))) => {
                log::warn!("render: region references missing {kind} {i}");
                return;
            }
        };

        for (i, contour) in region.data.curves.iter().enumerate() {
            if i > 0 {
                self.surface.new_sub_path();
            }
            plot_curve(self.surface, &self.scaler, contour, true);
        }

        if let Some(brush) = brush {
            self.apply_brush(brush);
            self.surface.fill_preserve();
        }
        match pen {
            Some(pen) => {
                self.apply_pen(pen);
                self.surface.stroke();
            }
            None => self.surface.new_path(),
        }
    }

    fn apply_pen(&mut self, pen: &Pen) {
        self.surface.set_source(&Paint::from_pattern(&pen.pattern, &self.scaler));
        self.surface.set_line_width(self.scaler.length(pen.width));
        self.surface.set_line_cap(pen.cap);
        self.surface.set_line_join(pen.join);
    }

    fn apply_brush(&mut self, brush: &Brush) {
        self.surface.set_source(&Paint::from_pattern(&brush.pattern, &self.scaler));
    }
}
