//! Document model and decoder for **LISON**, a JSON-based vector image
//! format.
//!
//! The only dependency is `serde_json`, used as the tokenizer. Decoding walks
//! the generic JSON tree against closed, table-driven schemas and produces a
//! fully validated [`Image`] or a single [`ParseFailure`] kind.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | `Image`, `Pen`, `Brush`, `Pattern`, `Shape`, `Segment`, ... |
//! | [`error`] | `ParseFailure` |
//! | [`decoder`] | `decode`, `decode_str`, `decode_slice` |
//! | [`validate`] | `check_indices` |
//!
//! # Quick start
//!
//! ```rust
//! use lison_format::decode_str;
//!
//! let src = r#"{
//!     "width": 64, "height": 64, "unit-per-inch": 96,
//!     "pens": [{ "pattern": { "type": "monochrome", "color": [0, 0, 0] },
//!                "width": 1, "cap": "round", "join": "round" }],
//!     "brushes": [],
//!     "shapes": [{ "type": "curve", "pen": 0, "data": [[0, 0], ["L", [64, 64]]] }]
//! }"#;
//!
//! let image = decode_str(src).unwrap();
//! assert_eq!(image.shapes.len(), 1);
//! ```

pub mod decoder;
pub mod error;
pub mod model;
mod schema;
pub mod validate;

pub use decoder::{decode, decode_slice, decode_str};
pub use error::ParseFailure;
pub use model::{
    Brush, Color, CubicBezierSegment, CurveData, CurveShape, GroupShape, Image, LineCap,
    LineJoin, LineSegment, LinearGradientPattern, MonochromePattern, Pattern, Pen, Point,
    QuadraticBezierSegment, RadialGradientPattern, RegionData, RegionShape, Segment, Shape,
};

#[cfg(test)]
mod decode_tests {
    use super::*;

    fn ok(src: &str) -> Image { decode_str(src).unwrap() }
    fn err(src: &str) -> ParseFailure { decode_str(src).unwrap_err() }

    const HEAD: &str = r#""width": 10, "height": 10, "unit-per-inch": 72"#;

    fn doc(rest: &str) -> String { format!("{{ {HEAD}, {rest} }}") }

    #[test] fn empty_image() {
        ok(&doc(r#""pens": [], "brushes": [], "shapes": []"#));
    }
    #[test] fn member_order_is_irrelevant() {
        ok(r#"{ "shapes": [], "brushes": [], "pens": [],
                "unit-per-inch": 1, "height": 2, "width": 3 }"#);
    }
    #[test] fn integer_and_float_numbers() {
        let im = ok(&doc(r#""pens": [{ "pattern": { "type": "monochrome", "color": [0.5, 1, 0] },
                        "width": 0.25, "cap": "square", "join": "miter" }],
              "brushes": [], "shapes": []"#));
        assert_eq!(im.pens[0].width, 0.25);
    }
    #[test] fn gradient_brush() {
        ok(&doc(r#""pens": [], "shapes": [],
              "brushes": [{ "pattern": { "type": "linear-gradient",
                  "point-1": [0, 0], "color-1": [1, 0, 0],
                  "point-2": [10, 0], "color-2": [0, 0, 1, 0] } }]"#));
    }
    #[test] fn region_with_hole() {
        ok(&doc(r#""pens": [], "brushes": [{ "pattern": { "type": "monochrome", "color": [0, 0, 0] } }],
              "shapes": [{ "type": "region", "brush": 0, "data": [
                  [[0, 0], ["L", [10, 0]], ["L", [10, 10]], ["L", [0, 10]]],
                  [[3, 3], ["L", [7, 3]], ["L", [7, 7]], ["L", [3, 7]]]
              ] }]"#));
    }
    #[test] fn err_not_json() { assert_eq!(err("{ width: 1 }"), ParseFailure::BadJson); }
    #[test] fn err_trailing_garbage() {
        assert_eq!(err(&format!("{} x", doc(r#""pens": [], "brushes": [], "shapes": []"#))), ParseFailure::BadJson);
    }
    #[test] fn err_unknown_image_member() {
        assert_eq!(err(&doc(r#""pens": [], "brushes": [], "shapes": [], "layers": []"#)), ParseFailure::BadImage);
    }
    #[test] fn err_bad_pen_width() {
        assert_eq!(
            err(&doc(r#""pens": [{ "pattern": { "type": "monochrome", "color": [0, 0, 0] },
                       "width": -1, "cap": "butt", "join": "miter" }],
                 "brushes": [], "shapes": []"#)),
            ParseFailure::BadPen
        );
    }
    #[test] fn err_dangling_brush() {
        assert_eq!(
            err(&doc(r#""pens": [], "brushes": [],
                 "shapes": [{ "type": "group", "content": [
                     { "type": "region", "brush": 0, "data": [[[0, 0]]] }
                 ] }]"#)),
            ParseFailure::BadShape
        );
    }
}
