//! `%` on 32-bit integers.
//!
//! Both operands convert to integers first. The result takes the sign of
//! the dividend and its magnitude stays below the divisor's, which bounds
//! the result when either operand is a range.

use wev_values::{AnyKind, EntryPath, Value, WarningCause};

use crate::conversion::{float_to_integer, string_to_integer, to_integer_interval};
use crate::EvalContext;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Operand {
    Point(i32),
    Range(i32, i32),
    Unknown,
}

fn operand(ctx: &mut EvalContext<'_>, value: &Value) -> Operand {
    match value {
        Value::Bool(b) => Operand::Point(i32::from(*b)),
        Value::Undefined => Operand::Point(0),
        Value::Int(n) => Operand::Point(*n),
        Value::Float(x) => float_to_integer(*x).map_or(Operand::Unknown, Operand::Point),
        Value::Str(s) => string_to_integer(s).map_or(Operand::Unknown, Operand::Point),
        Value::Resource(id) => i32::try_from(id.raw()).map_or(Operand::Unknown, Operand::Point),
        Value::Array(_) => {
            let keys = ctx
                .snapshot()
                .iterate_indexes(&EntryPath::of_value(value.clone()));
            Operand::Point(i32::from(!keys.is_empty()))
        }
        Value::IntInterval(_) | Value::FloatInterval(_) => to_integer_interval(value)
            .map_or(Operand::Unknown, |i| Operand::Range(i.start(), i.end())),
        Value::Any(AnyKind::Boolean | AnyKind::Array) => Operand::Range(0, 1),
        Value::Any(AnyKind::Integer) => Operand::Range(i32::MIN, i32::MAX),
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn(
                "Object cannot be converted to integer by modulo operation",
                WarningCause::ObjectConvertedToInteger,
            );
            Operand::Unknown
        }
        _ => Operand::Unknown,
    }
}

pub(super) fn evaluate(ctx: &mut EvalContext<'_>, left: &Value, right: &Value) -> Value {
    let dividend = operand(ctx, left);
    let divisor = operand(ctx, right);

    let (min_abs, max_abs) = match divisor {
        Operand::Point(0) => {
            ctx.warn("Modulo by zero", WarningCause::DivisionByZero);
            return ctx.snapshot().create_bool(false);
        }
        Operand::Point(d) => (magnitude(d), magnitude(d)),
        Operand::Range(a, b) if a > 0 || b < 0 => {
            let (a, b) = (magnitude(a), magnitude(b));
            (a.min(b), a.max(b))
        }
        Operand::Range(..) | Operand::Unknown => {
            ctx.warn(
                "Modulo by any integer, possible modulo by zero",
                WarningCause::DivisionByZero,
            );
            return ctx.snapshot().any_value();
        }
    };

    match (dividend, divisor) {
        // `MIN % -1` overflows in the machine; the result is zero.
        (Operand::Point(n), Operand::Point(d)) => {
            ctx.snapshot().create_int(n.checked_rem(d).unwrap_or(0))
        }
        (Operand::Point(n), _) => range_mod(ctx, n, n, min_abs, max_abs),
        (Operand::Range(a, b), _) => range_mod(ctx, a, b, min_abs, max_abs),
        (Operand::Unknown, _) => range_mod(ctx, i32::MIN, i32::MAX, min_abs, max_abs),
    }
}

fn magnitude(n: i32) -> i64 {
    i64::from(n).abs()
}

/// Results of `x % d` for `x` in `[low, high]` and `|d|` in `[min_abs, max_abs]`.
fn range_mod(ctx: &EvalContext<'_>, low: i32, high: i32, min_abs: i64, max_abs: i64) -> Value {
    let (low, high) = (i64::from(low), i64::from(high));
    // Every dividend is smaller than every divisor: the remainder is the dividend.
    if low.saturating_abs() < min_abs && high.saturating_abs() < min_abs {
        return to_value(ctx, low, high);
    }
    let bound = max_abs.saturating_sub(1);
    let start = if low < 0 {
        bound.min(low.saturating_neg()).saturating_neg()
    } else {
        0
    };
    let end = if high > 0 { bound.min(high) } else { 0 };
    to_value(ctx, start, end)
}

fn to_value(ctx: &EvalContext<'_>, start: i64, end: i64) -> Value {
    match (i32::try_from(start), i32::try_from(end)) {
        (Ok(start), Ok(end)) => ctx.snapshot().create_integer_interval(start, end),
        _ => ctx.snapshot().any_integer_value(),
    }
}
