//! Increment and decrement.
//!
//! Integers that would leave their range promote to float, the same rule
//! unary minus follows. Strings are only partly modelled: decrementing one
//! is a no-op, incrementing one yields "any string".

use wev_values::{
    invalid_expression_value, AnyKind, EvalResult, IncDecOp, MemoryEntry, Value,
};

use crate::conversion::long_to_float;
use crate::EvalContext;

/// Apply `op` to every possible value of `operand`.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn evaluate_incdec_entry(
    ctx: &mut EvalContext<'_>,
    op: IncDecOp,
    operand: &MemoryEntry,
) -> EvalResult<MemoryEntry> {
    let mut results = Vec::with_capacity(operand.count());
    for value in operand {
        results.push(evaluate_incdec(ctx, op, value)?);
    }
    MemoryEntry::try_from_values(results)
}

/// Apply `op` to a single value.
pub fn evaluate_incdec(ctx: &mut EvalContext<'_>, op: IncDecOp, value: &Value) -> EvalResult {
    let value = value.clone().normalized();
    let step: i32 = if op.is_increment() { 1 } else { -1 };
    let result = match &value {
        Value::Int(n) => match n.checked_add(step) {
            Some(next) => ctx.outset().create_int(next),
            None => ctx.outset().create_double(f64::from(*n) + f64::from(step)),
        },
        Value::Long(n) => match n.checked_add(i64::from(step)) {
            Some(next) => ctx.outset().create_long(next),
            None => ctx.outset().create_double(long_to_float(*n) + f64::from(step)),
        },
        Value::Float(x) => ctx.outset().create_double(x + f64::from(step)),
        Value::IntInterval(interval) => {
            let (start, end) = (interval.start(), interval.end());
            match (start.checked_add(step), end.checked_add(step)) {
                (Some(low), Some(high)) => ctx.outset().create_integer_interval(low, high),
                _ => ctx.outset().create_float_interval(
                    f64::from(start) + f64::from(step),
                    f64::from(end) + f64::from(step),
                ),
            }
        }
        Value::LongInterval(interval) => {
            let (start, end) = (interval.start(), interval.end());
            let shift = i64::from(step);
            match (start.checked_add(shift), end.checked_add(shift)) {
                (Some(low), Some(high)) => ctx.outset().create_longint_interval(low, high),
                _ => ctx.outset().create_float_interval(
                    long_to_float(start) + f64::from(step),
                    long_to_float(end) + f64::from(step),
                ),
            }
        }
        Value::FloatInterval(interval) => ctx.outset().create_float_interval(
            interval.start() + f64::from(step),
            interval.end() + f64::from(step),
        ),
        // TODO: model alphanumeric string increment ("a" -> "b", "Az" -> "Ba").
        Value::Str(_) | Value::Any(AnyKind::String) if op.is_increment() => {
            ctx.outset().any_string_value()
        }
        Value::Undefined if op.is_increment() => ctx.outset().create_int(1),
        Value::Any(AnyKind::Integer | AnyKind::Longint) => ctx.outset().any_value(),
        Value::Bool(_)
        | Value::Str(_)
        | Value::Undefined
        | Value::Array(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Any(_) => value.clone(),
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(&value));
        }
    };
    Ok(result)
}
