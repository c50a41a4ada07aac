//! Table-driven building blocks shared by every decoding rule.
//!
//! Each object or tuple grammar is a static table of [`Field`]s. The generic
//! routines here enforce the structural checks (closed schema, required
//! members, exact arity) once, and the tables only say how each member fills
//! the target.

use serde_json::Value;

use crate::error::ParseFailure;

/// Writes one decoded member into the target under construction.
pub(crate) type Fill<T> = fn(&mut T, &Value, ParseFailure) -> Result<(), ParseFailure>;

/// One entry of an object or tuple grammar.
pub(crate) struct Field<T> {
    pub name: &'static str,
    pub required: bool,
    pub fill: Fill<T>,
}

/// Accepts any value and stores nothing (tags, editor metadata).
pub(crate) fn ignore<T>(_: &mut T, _: &Value, _: ParseFailure) -> Result<(), ParseFailure> {
    Ok(())
}

// ── containers ────────────────────────────────────────────────────────────

/// Decodes a JSON object against a closed table.
///
/// Fails with `ctx` unless `value` is an object, every required member is
/// present and every present member is named in `fields`. Absent optional
/// members keep their `Default` value.
pub(crate) fn decode_object<T: Default>(
    value: &Value,
    fields: &[Field<T>],
    ctx: ParseFailure,
) -> Result<T, ParseFailure> {
    let object = value.as_object().ok_or(ctx)?;

    let has_required = fields
        .iter()
        .filter(|f| f.required)
        .all(|f| object.contains_key(f.name));
    let is_closed = object
        .keys()
        .all(|k| fields.iter().any(|f| f.name == k.as_str()));

    if !has_required || !is_closed {
        return Err(ctx);
    }

    let mut target = T::default();
    for field in fields {
        if let Some(member) = object.get(field.name) {
            (field.fill)(&mut target, member, ctx)?;
        }
    }
    Ok(target)
}

/// Decodes a fixed-length JSON array positionally.
///
/// The array length must equal `slots.len()` exactly.
pub(crate) fn decode_tuple<T: Default>(
    value: &Value,
    slots: &[Fill<T>],
    ctx: ParseFailure,
) -> Result<T, ParseFailure> {
    let items = value.as_array().ok_or(ctx)?;
    if items.len() != slots.len() {
        return Err(ctx);
    }

    let mut target = T::default();
    for (fill, item) in slots.iter().zip(items) {
        fill(&mut target, item, ctx)?;
    }
    Ok(target)
}

/// Decodes every element of a JSON array, stopping at the first failure.
pub(crate) fn decode_array<T>(
    value: &Value,
    ctx: ParseFailure,
    element: impl Fn(&Value) -> Result<T, ParseFailure>,
) -> Result<Vec<T>, ParseFailure> {
    value.as_array().ok_or(ctx)?.iter().map(element).collect()
}

// ── discriminants ─────────────────────────────────────────────────────────

/// Reads the string `type` member used by patterns and shapes.
pub(crate) fn object_tag(value: &Value, ctx: ParseFailure) -> Result<&str, ParseFailure> {
    value
        .as_object()
        .and_then(|o| o.get("type"))
        .and_then(Value::as_str)
        .ok_or(ctx)
}

/// Reads the leading string slot used by segment tuples.
pub(crate) fn tuple_tag(value: &Value, ctx: ParseFailure) -> Result<&str, ParseFailure> {
    value
        .as_array()
        .and_then(|a| a.first())
        .and_then(Value::as_str)
        .ok_or(ctx)
}

// ── numbers ───────────────────────────────────────────────────────────────

pub(crate) fn decode_number(value: &Value, ctx: ParseFailure) -> Result<f64, ParseFailure> {
    value.as_f64().ok_or(ctx)
}

/// Decodes a number and rejects it unless `accept` holds. Never clamps.
fn decode_where(
    value: &Value,
    ctx: ParseFailure,
    accept: fn(f64) -> bool,
) -> Result<f64, ParseFailure> {
    let number = decode_number(value, ctx)?;
    if accept(number) { Ok(number) } else { Err(ctx) }
}

pub(crate) fn decode_positive(value: &Value, ctx: ParseFailure) -> Result<f64, ParseFailure> {
    decode_where(value, ctx, |n| n > 0.0)
}

pub(crate) fn decode_non_negative(value: &Value, ctx: ParseFailure) -> Result<f64, ParseFailure> {
    decode_where(value, ctx, |n| n >= 0.0)
}

pub(crate) fn decode_channel(value: &Value, ctx: ParseFailure) -> Result<f64, ParseFailure> {
    decode_where(value, ctx, |n| (0.0..=1.0).contains(&n))
}

/// Decodes a non-negative integral number (`2` and `2.0` both qualify).
pub(crate) fn decode_index(value: &Value, ctx: ParseFailure) -> Result<usize, ParseFailure> {
    if let Some(index) = value.as_u64() {
        return usize::try_from(index).map_err(|_| ctx);
    }
    let number = decode_where(value, ctx, |n| n >= 0.0 && n.floor() == n)?;
    // Saturates for huge values, which the index check rejects later.
    Ok(number as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CTX: ParseFailure = ParseFailure::BadPen;

    #[derive(Debug, Default, PartialEq)]
    struct Pair {
        a: f64,
        b: Option<f64>,
    }

    const PAIR: &[Field<Pair>] = &[
        Field { name: "kind", required: true, fill: ignore },
        Field {
            name: "a",
            required: true,
            fill: |t, v, ctx| {
                t.a = decode_number(v, ctx)?;
                Ok(())
            },
        },
        Field {
            name: "b",
            required: false,
            fill: |t, v, ctx| {
                t.b = Some(decode_positive(v, ctx)?);
                Ok(())
            },
        },
    ];

    // ── decode_object ─────────────────────────────────────────────────────

    #[test]
    fn object_fills_present_members() {
        let out = decode_object(&json!({"kind": 0, "a": 1.5, "b": 2}), PAIR, CTX).unwrap();
        assert_eq!(out, Pair { a: 1.5, b: Some(2.0) });
    }

    #[test]
    fn object_optional_member_keeps_default() {
        let out = decode_object(&json!({"kind": "x", "a": 1}), PAIR, CTX).unwrap();
        assert_eq!(out.b, None);
    }

    #[test]
    fn object_missing_required_fails() {
        assert_eq!(decode_object(&json!({"a": 1}), PAIR, CTX), Err(CTX));
    }

    #[test]
    fn object_unknown_member_fails() {
        let v = json!({"kind": 0, "a": 1, "extra": null});
        assert_eq!(decode_object(&v, PAIR, CTX), Err(CTX));
    }

    #[test]
    fn object_rejects_non_object() {
        assert_eq!(decode_object(&json!([1, 2]), PAIR, CTX), Err(CTX));
    }

    #[test]
    fn object_member_failure_propagates() {
        let v = json!({"kind": 0, "a": 1, "b": -1});
        assert_eq!(decode_object(&v, PAIR, CTX), Err(CTX));
    }

    // ── decode_tuple ──────────────────────────────────────────────────────

    const SLOTS: &[Fill<Pair>] = &[
        |t, v, ctx| {
            t.a = decode_number(v, ctx)?;
            Ok(())
        },
        ignore,
    ];

    #[test]
    fn tuple_requires_exact_arity() {
        assert!(decode_tuple(&json!([1, "x"]), SLOTS, CTX).is_ok());
        assert_eq!(decode_tuple(&json!([1]), SLOTS, CTX), Err(CTX));
        assert_eq!(decode_tuple(&json!([1, 2, 3]), SLOTS, CTX), Err(CTX));
        assert_eq!(decode_tuple(&json!({"0": 1}), SLOTS, CTX), Err(CTX));
    }

    // ── decode_array ──────────────────────────────────────────────────────

    #[test]
    fn array_decodes_each_element() {
        let out = decode_array(&json!([1, 2, 3]), CTX, |v| decode_number(v, CTX)).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn array_first_element_failure_aborts() {
        let out = decode_array(&json!([1, "two", 3]), CTX, |v| {
            decode_number(v, ParseFailure::BadShape)
        });
        assert_eq!(out, Err(ParseFailure::BadShape));
    }

    #[test]
    fn array_rejects_non_array() {
        let out = decode_array(&json!({}), CTX, |v| decode_number(v, CTX));
        assert_eq!(out, Err(CTX));
    }

    // ── tags ──────────────────────────────────────────────────────────────

    #[test]
    fn tags_must_be_strings() {
        assert_eq!(object_tag(&json!({"type": "curve"}), CTX), Ok("curve"));
        assert_eq!(object_tag(&json!({"type": 3}), CTX), Err(CTX));
        assert_eq!(object_tag(&json!({}), CTX), Err(CTX));
        assert_eq!(tuple_tag(&json!(["L", [0, 0]]), CTX), Ok("L"));
        assert_eq!(tuple_tag(&json!([]), CTX), Err(CTX));
        assert_eq!(tuple_tag(&json!([1, 2]), CTX), Err(CTX));
    }

    // ── numbers ───────────────────────────────────────────────────────────

    #[test]
    fn numeric_domains_are_enforced_not_clamped() {
        assert_eq!(decode_positive(&json!(0), CTX), Err(CTX));
        assert_eq!(decode_positive(&json!(0.5), CTX), Ok(0.5));
        assert_eq!(decode_non_negative(&json!(0), CTX), Ok(0.0));
        assert_eq!(decode_non_negative(&json!(-0.1), CTX), Err(CTX));
        assert_eq!(decode_channel(&json!(1), CTX), Ok(1.0));
        assert_eq!(decode_channel(&json!(1.01), CTX), Err(CTX));
        assert_eq!(decode_number(&json!("1"), CTX), Err(CTX));
    }

    #[test]
    fn index_accepts_integral_numbers_only() {
        assert_eq!(decode_index(&json!(3), CTX), Ok(3));
        assert_eq!(decode_index(&json!(2.0), CTX), Ok(2));
        assert_eq!(decode_index(&json!(1.5), CTX), Err(CTX));
        assert_eq!(decode_index(&json!(-1), CTX), Err(CTX));
        assert_eq!(decode_index(&json!(null), CTX), Err(CTX));
    }
}
