//! Identity and loose comparison.
//!
//! Loose comparison reduces both operands to closed `f64` ranges and decides
//! the operator on the ranges: a definite answer only when every pair of
//! runtime values agrees, "any boolean" otherwise.

use std::cmp::Ordering;

use wev_values::{AnyKind, BinaryOp, EvalResult, TypeFamilies, Value, WarningCause};

use crate::boolean::truth_value;
use crate::conversion::{to_boolean, try_convert_to_number};
use crate::EvalContext;

/// A closed range of numbers `(low, high)`.
type Range = (f64, f64);

const EQUAL: Range = (0.0, 0.0);
const GREATER: Range = (1.0, 1.0);

/// `===` and `!==`.
pub(super) fn identity(ctx: &mut EvalContext<'_>, op: BinaryOp, left: &Value, right: &Value) -> Value {
    let same = identical(ctx, left, right);
    let truth = if op == BinaryOp::NotIdentical {
        same.map(|b| !b)
    } else {
        same
    };
    truth_value(ctx, truth)
}

#[expect(clippy::float_cmp, reason = "identity of floats is exact equality")]
fn identical(ctx: &mut EvalContext<'_>, left: &Value, right: &Value) -> Option<bool> {
    if !left.families().intersects(right.families()) {
        return Some(false);
    }
    if left.families() == TypeFamilies::FLOAT
        && right.families() == TypeFamilies::FLOAT
        && ctx.options().warn_float_identity()
    {
        ctx.warn(
            "Comparing floating-point numbers directly for equality",
            WarningCause::FloatingPointIdentity,
        );
    }
    match (left, right) {
        (Value::Float(a), Value::Float(b)) => Some(a == b),
        // Distinct array identities may still hold equal contents.
        (Value::Array(a), Value::Array(b)) => (a == b).then_some(true),
        (a, b) if a.is_concrete() && b.is_concrete() => Some(a == b),
        (Value::IntInterval(i), Value::Int(n)) | (Value::Int(n), Value::IntInterval(i)) => {
            (!i.contains(*n)).then_some(false)
        }
        (Value::FloatInterval(i), Value::Float(x)) | (Value::Float(x), Value::FloatInterval(i)) => {
            (!i.contains(*x)).then_some(false)
        }
        (Value::IntInterval(a), Value::IntInterval(b)) => a.is_disjoint(*b).then_some(false),
        (Value::FloatInterval(a), Value::FloatInterval(b)) => a.is_disjoint(*b).then_some(false),
        _ => None,
    }
}

/// `==`, `!=`, `<`, `<=`, `>` and `>=`.
pub(super) fn compare(
    ctx: &mut EvalContext<'_>,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult {
    let truth = loose(ctx, op, left, right)?;
    Ok(truth_value(ctx, truth))
}

fn loose(
    ctx: &mut EvalContext<'_>,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult<Option<bool>> {
    // Null against a string compares as the empty string.
    match (left, right) {
        (Value::Undefined, Value::Str(s)) => {
            return Ok(decide(op, ordering_range("".cmp(s.as_str())), EQUAL));
        }
        (Value::Str(s), Value::Undefined) => {
            return Ok(decide(op, ordering_range(s.as_str().cmp("")), EQUAL));
        }
        (Value::Undefined, Value::Any(AnyKind::String))
        | (Value::Any(AnyKind::String), Value::Undefined) => return Ok(None),
        _ => {}
    }

    if is_boolean_like(left) || is_boolean_like(right) {
        let l = truth_range(ctx, left)?;
        let r = truth_range(ctx, right)?;
        return Ok(decide(op, l, r));
    }

    if left.is_array_like() || right.is_array_like() {
        return Ok(match (left, right) {
            (Value::Array(a), Value::Array(b)) if a == b => decide(op, EQUAL, EQUAL),
            (array, other) if array.is_array_like() && is_definite_scalar(other) => {
                decide(op, GREATER, EQUAL)
            }
            (other, array) if array.is_array_like() && is_definite_scalar(other) => {
                decide(op, EQUAL, GREATER)
            }
            _ => None,
        });
    }

    if left.is_object_like() || right.is_object_like() {
        if let (Value::Object(a), Value::Object(b)) = (left, right) {
            if a.id == b.id {
                return Ok(decide(op, EQUAL, EQUAL));
            }
        }
        if is_definite_scalar(left) || is_definite_scalar(right) {
            ctx.warn(
                "Object cannot be converted to integer by comparison",
                WarningCause::ObjectConvertedToInteger,
            );
        }
        return Ok(None);
    }

    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Ok(decide(op, ordering_range(a.cmp(b)), EQUAL));
    }

    Ok(match (numeric_range(left), numeric_range(right)) {
        (Some(l), Some(r)) => decide(op, l, r),
        _ => None,
    })
}

fn is_boolean_like(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Undefined | Value::Any(AnyKind::Boolean))
}

/// Numbers and strings, concrete or abstract.
fn is_definite_scalar(value: &Value) -> bool {
    !value.families().is_empty()
        && TypeFamilies::NUMERIC
            .union(TypeFamilies::STRING)
            .contains(value.families())
}

fn truth_range(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Range> {
    Ok(match to_boolean(ctx, value)? {
        Some(true) => (1.0, 1.0),
        Some(false) => (0.0, 0.0),
        None => (0.0, 1.0),
    })
}

fn ordering_range(ordering: Ordering) -> Range {
    match ordering {
        Ordering::Less => (-1.0, -1.0),
        Ordering::Equal => EQUAL,
        Ordering::Greater => GREATER,
    }
}

fn numeric_range(value: &Value) -> Option<Range> {
    match value {
        Value::Int(n) => Some((f64::from(*n), f64::from(*n))),
        Value::Float(x) => Some((*x, *x)),
        Value::Str(s) => {
            let parsed = try_convert_to_number(s, true);
            let x = if parsed.is_integer {
                f64::from(parsed.integer)
            } else {
                parsed.float
            };
            Some((x, x))
        }
        Value::Resource(id) => Some((f64::from(id.raw()), f64::from(id.raw()))),
        Value::IntInterval(i) => Some((f64::from(i.start()), f64::from(i.end()))),
        Value::FloatInterval(i) => Some((i.start(), i.end())),
        Value::Any(AnyKind::Integer) => Some((f64::from(i32::MIN), f64::from(i32::MAX))),
        _ => None,
    }
}

/// Decide `op` for every `x` in `left` and `y` in `right`.
///
/// `Some` only when the answer is the same for all pairs.
#[expect(clippy::float_cmp, reason = "range bounds are compared exactly")]
fn decide(op: BinaryOp, left: Range, right: Range) -> Option<bool> {
    let (a, b) = left;
    let (c, d) = right;
    match op {
        BinaryOp::Equal => {
            if a == b && c == d && a == c {
                Some(true)
            } else if b < c || d < a {
                Some(false)
            } else {
                None
            }
        }
        BinaryOp::NotEqual => decide(BinaryOp::Equal, left, right).map(|b| !b),
        BinaryOp::LessThan => {
            if b < c {
                Some(true)
            } else if a >= d {
                Some(false)
            } else {
                None
            }
        }
        BinaryOp::LessThanOrEqual => {
            if b <= c {
                Some(true)
            } else if a > d {
                Some(false)
            } else {
                None
            }
        }
        BinaryOp::GreaterThan => decide(BinaryOp::LessThan, right, left),
        BinaryOp::GreaterThanOrEqual => decide(BinaryOp::LessThanOrEqual, right, left),
        _ => None,
    }
}
