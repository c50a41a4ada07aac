use lison_format::{LineCap, LineJoin};

use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, RadialGradient};
use crate::render::{CompositeOp, FillRule};

/// One recorded [`Surface`](crate::render::Surface) call.
///
/// Extending the surface:
/// - add the method to `Surface`
/// - add a variant here
/// - record it in `CallList`
/// - implement it in every device backend
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetOperator(CompositeOp),
    SetFillRule(FillRule),
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo(Vec2, Vec2, Vec2),
    ClosePath,
    NewSubPath,
    NewPath,
    SetSourceColor(Color),
    SetSourceLinear(LinearGradient),
    SetSourceRadial(RadialGradient),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    FillPreserve,
    Stroke,
}

impl SurfaceCall {
    #[inline]
    pub fn is_path_op(&self) -> bool {
        matches!(
            self,
            SurfaceCall::MoveTo(_)
                | SurfaceCall::LineTo(_)
                | SurfaceCall::CurveTo(..)
                | SurfaceCall::ClosePath
                | SurfaceCall::NewSubPath
        )
    }

    #[inline]
    pub fn is_paint_op(&self) -> bool {
        matches!(
            self,
            SurfaceCall::SetSourceColor(_)
                | SurfaceCall::SetSourceLinear(_)
                | SurfaceCall::SetSourceRadial(_)
                | SurfaceCall::FillPreserve
                | SurfaceCall::Stroke
        )
    }
}
