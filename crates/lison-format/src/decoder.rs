//! Per-type decoding rules for the LISON grammar.
//!
//! Every rule takes the failure kind of the enclosing top-level entry
//! (`ctx`), so a bad color inside a pen reports `BadPen` while the same color
//! inside a shape reports `BadShape`.

use serde_json::Value;

use crate::error::ParseFailure;
use crate::model::{
    Brush, Color, CubicBezierSegment, CurveData, CurveShape, GroupShape, Image, LineCap,
    LineJoin, LineSegment, LinearGradientPattern, MonochromePattern, Pattern, Pen, Point,
    QuadraticBezierSegment, RadialGradientPattern, RegionData, RegionShape, Segment, Shape,
};
use crate::schema::{
    decode_array, decode_channel, decode_index, decode_non_negative, decode_number,
    decode_object, decode_positive, decode_tuple, ignore, object_tag, tuple_tag, Field, Fill,
};
use crate::validate::check_indices;

use crate::error::ParseFailure::{BadBrush, BadImage, BadJson, BadPen, BadShape};

// ── entry points ──────────────────────────────────────────────────────────

/// Decodes LISON source text.
pub fn decode_str(text: &str) -> Result<Image, ParseFailure> {
    let value: Value = serde_json::from_str(text).map_err(|_| BadJson)?;
    decode(&value)
}

/// Decodes LISON source bytes (e.g. raw file contents).
pub fn decode_slice(bytes: &[u8]) -> Result<Image, ParseFailure> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| BadJson)?;
    decode(&value)
}

/// Decodes an already-tokenized JSON tree into a validated [`Image`].
///
/// Either the whole image is returned or a single failure kind; nothing
/// partial is ever exposed. Pen/brush indices are checked after the full
/// tree is built.
pub fn decode(value: &Value) -> Result<Image, ParseFailure> {
    let image = decode_object(value, IMAGE, BadImage)?;
    check_indices(&image)?;
    Ok(image)
}

// ── image ─────────────────────────────────────────────────────────────────

const IMAGE: &[Field<Image>] = &[
    Field {
        name: "width",
        required: true,
        fill: |im, v, ctx| {
            im.width = decode_positive(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "height",
        required: true,
        fill: |im, v, ctx| {
            im.height = decode_positive(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "unit-per-inch",
        required: true,
        fill: |im, v, ctx| {
            im.unit_per_inch = decode_positive(v, ctx)?;
            Ok(())
        },
    },
    Field { name: "editor", required: false, fill: ignore },
    Field {
        name: "pens",
        required: true,
        fill: |im, v, ctx| {
            im.pens = decode_array(v, ctx, decode_pen)?;
            Ok(())
        },
    },
    Field {
        name: "brushes",
        required: true,
        fill: |im, v, ctx| {
            im.brushes = decode_array(v, ctx, decode_brush)?;
            Ok(())
        },
    },
    Field {
        name: "shapes",
        required: true,
        fill: |im, v, ctx| {
            im.shapes = decode_array(v, ctx, decode_shape)?;
            Ok(())
        },
    },
];

// ── pens & brushes ────────────────────────────────────────────────────────

const PEN: &[Field<Pen>] = &[
    Field {
        name: "pattern",
        required: true,
        fill: |pen, v, ctx| {
            pen.pattern = decode_pattern(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "width",
        required: true,
        fill: |pen, v, ctx| {
            pen.width = decode_positive(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "cap",
        required: true,
        fill: |pen, v, ctx| {
            pen.cap = decode_line_cap(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "join",
        required: true,
        fill: |pen, v, ctx| {
            pen.join = decode_line_join(v, ctx)?;
            Ok(())
        },
    },
];

fn decode_pen(value: &Value) -> Result<Pen, ParseFailure> {
    decode_object(value, PEN, BadPen)
}

fn decode_line_cap(value: &Value, ctx: ParseFailure) -> Result<LineCap, ParseFailure> {
    match value.as_str() {
        Some("butt") => Ok(LineCap::Butt),
        Some("round") => Ok(LineCap::Round),
        Some("square") => Ok(LineCap::Square),
        _ => Err(ctx),
    }
}

fn decode_line_join(value: &Value, ctx: ParseFailure) -> Result<LineJoin, ParseFailure> {
    match value.as_str() {
        Some("miter") => Ok(LineJoin::Miter),
        Some("round") => Ok(LineJoin::Round),
        Some("bevel") => Ok(LineJoin::Bevel),
        _ => Err(ctx),
    }
}

const BRUSH: &[Field<Brush>] = &[Field {
    name: "pattern",
    required: true,
    fill: |brush, v, ctx| {
        brush.pattern = decode_pattern(v, ctx)?;
        Ok(())
    },
}];

fn decode_brush(value: &Value) -> Result<Brush, ParseFailure> {
    decode_object(value, BRUSH, BadBrush)
}

// ── patterns ──────────────────────────────────────────────────────────────

fn decode_pattern(value: &Value, ctx: ParseFailure) -> Result<Pattern, ParseFailure> {
    match object_tag(value, ctx)? {
        "monochrome" => decode_object(value, MONOCHROME, ctx).map(Pattern::Monochrome),
        "linear-gradient" => decode_object(value, LINEAR_GRADIENT, ctx).map(Pattern::LinearGradient),
        "radial-gradient" => decode_object(value, RADIAL_GRADIENT, ctx).map(Pattern::RadialGradient),
        _ => Err(ctx),
    }
}

const MONOCHROME: &[Field<MonochromePattern>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "color",
        required: true,
        fill: |p, v, ctx| {
            p.color = decode_color(v, ctx)?;
            Ok(())
        },
    },
];

const LINEAR_GRADIENT: &[Field<LinearGradientPattern>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "point-1",
        required: true,
        fill: |p, v, ctx| {
            p.point_1 = decode_point(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "color-1",
        required: true,
        fill: |p, v, ctx| {
            p.color_1 = decode_color(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "point-2",
        required: true,
        fill: |p, v, ctx| {
            p.point_2 = decode_point(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "color-2",
        required: true,
        fill: |p, v, ctx| {
            p.color_2 = decode_color(v, ctx)?;
            Ok(())
        },
    },
];

const RADIAL_GRADIENT: &[Field<RadialGradientPattern>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "center-1",
        required: true,
        fill: |p, v, ctx| {
            p.center_1 = decode_point(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "radius-1",
        required: true,
        fill: |p, v, ctx| {
            p.radius_1 = decode_non_negative(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "color-1",
        required: true,
        fill: |p, v, ctx| {
            p.color_1 = decode_color(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "center-2",
        required: true,
        fill: |p, v, ctx| {
            p.center_2 = decode_point(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "radius-2",
        required: true,
        fill: |p, v, ctx| {
            p.radius_2 = decode_non_negative(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "color-2",
        required: true,
        fill: |p, v, ctx| {
            p.color_2 = decode_color(v, ctx)?;
            Ok(())
        },
    },
];

// ── points & colors ───────────────────────────────────────────────────────

const POINT: &[Fill<Point>] = &[
    |p, v, ctx| {
        p.x = decode_number(v, ctx)?;
        Ok(())
    },
    |p, v, ctx| {
        p.y = decode_number(v, ctx)?;
        Ok(())
    },
];

fn decode_point(value: &Value, ctx: ParseFailure) -> Result<Point, ParseFailure> {
    decode_tuple(value, POINT, ctx)
}

/// `[r, g, b]` (opaque) or `[r, g, b, a]`.
fn decode_color(value: &Value, ctx: ParseFailure) -> Result<Color, ParseFailure> {
    let channels = value.as_array().ok_or(ctx)?;
    let alpha = match channels.len() {
        3 => 1.0,
        4 => decode_channel(&channels[3], ctx)?,
        _ => return Err(ctx),
    };

    Ok(Color {
        red: decode_channel(&channels[0], ctx)?,
        green: decode_channel(&channels[1], ctx)?,
        blue: decode_channel(&channels[2], ctx)?,
        alpha,
    })
}

// ── shapes ────────────────────────────────────────────────────────────────

fn decode_shape(value: &Value) -> Result<Shape, ParseFailure> {
    match object_tag(value, BadShape)? {
        "group" => decode_object(value, GROUP, BadShape).map(Shape::Group),
        "curve" => decode_object(value, CURVE, BadShape).map(Shape::Curve),
        "region" => decode_object(value, REGION, BadShape).map(Shape::Region),
        _ => Err(BadShape),
    }
}

const GROUP: &[Field<GroupShape>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "content",
        required: true,
        fill: |g, v, ctx| {
            g.content = decode_array(v, ctx, decode_shape)?;
            Ok(())
        },
    },
    Field { name: "edit-annot", required: false, fill: ignore },
];

const CURVE: &[Field<CurveShape>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "pen",
        required: true,
        fill: |c, v, ctx| {
            c.pen = decode_index(v, ctx)?;
            Ok(())
        },
    },
    Field {
        name: "data",
        required: true,
        fill: |c, v, _| {
            c.data = decode_curve_data(v)?;
            Ok(())
        },
    },
];

const REGION: &[Field<RegionShape>] = &[
    Field { name: "type", required: true, fill: ignore },
    Field {
        name: "pen",
        required: false,
        fill: |r, v, ctx| {
            r.pen = Some(decode_index(v, ctx)?);
            Ok(())
        },
    },
    Field {
        name: "brush",
        required: false,
        fill: |r, v, ctx| {
            r.brush = Some(decode_index(v, ctx)?);
            Ok(())
        },
    },
    Field {
        name: "data",
        required: true,
        fill: |r, v, _| {
            r.data = decode_region_data(v)?;
            Ok(())
        },
    },
];

/// `[start, segment*]`; the start point is mandatory.
fn decode_curve_data(value: &Value) -> Result<CurveData, ParseFailure> {
    let (start, segments) = value
        .as_array()
        .and_then(|items| items.split_first())
        .ok_or(BadShape)?;

    Ok(CurveData {
        start: decode_point(start, BadShape)?,
        segments: segments.iter().map(decode_segment).collect::<Result<_, _>>()?,
    })
}

fn decode_region_data(value: &Value) -> Result<RegionData, ParseFailure> {
    let curves = decode_array(value, BadShape, decode_curve_data)?;
    if curves.is_empty() {
        return Err(BadShape);
    }
    Ok(RegionData { curves })
}

// ── segments ──────────────────────────────────────────────────────────────

fn decode_segment(value: &Value) -> Result<Segment, ParseFailure> {
    match tuple_tag(value, BadShape)? {
        "L" => decode_tuple(value, LINE, BadShape).map(Segment::Line),
        "Q" => decode_tuple(value, QUADRATIC, BadShape).map(Segment::QuadraticBezier),
        "C" => decode_tuple(value, CUBIC, BadShape).map(Segment::CubicBezier),
        _ => Err(BadShape),
    }
}

const LINE: &[Fill<LineSegment>] = &[ignore, |s, v, ctx| {
    s.point_2 = decode_point(v, ctx)?;
    Ok(())
}];

const QUADRATIC: &[Fill<QuadraticBezierSegment>] = &[
    ignore,
    |s, v, ctx| {
        s.point_2 = decode_point(v, ctx)?;
        Ok(())
    },
    |s, v, ctx| {
        s.point_3 = decode_point(v, ctx)?;
        Ok(())
    },
];

const CUBIC: &[Fill<CubicBezierSegment>] = &[
    ignore,
    |s, v, ctx| {
        s.point_2 = decode_point(v, ctx)?;
        Ok(())
    },
    |s, v, ctx| {
        s.point_3 = decode_point(v, ctx)?;
        Ok(())
    },
    |s, v, ctx| {
        s.point_4 = decode_point(v, ctx)?;
        Ok(())
    },
];
