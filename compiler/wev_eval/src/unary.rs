//! Unary operators and casts.
//!
//! One exhaustive `match` per operator over the operand kind. Degenerate
//! intervals are normalized before dispatch, so `[3, 3]` takes the same path
//! as `3`. Integer negation that would overflow promotes to float, both for
//! points and for interval endpoints.

use wev_values::{
    invalid_expression_value, not_supported, AnyKind, EntryPath, EvalResult, Interval, MemoryEntry,
    UnaryOp, Value, WarningCause,
};

use crate::boolean::truth_value;
use crate::conversion::{
    copy_members, long_to_float, to_array, to_boolean, to_float, to_float_interval, to_integer,
    to_integer_interval, to_object, try_convert_to_number,
};
use crate::string::evaluate_to_string;
use crate::EvalContext;

/// Apply `op` to every possible value of `operand`.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn evaluate_unary_entry(
    ctx: &mut EvalContext<'_>,
    op: UnaryOp,
    operand: &MemoryEntry,
) -> EvalResult<MemoryEntry> {
    let mut results = Vec::with_capacity(operand.count());
    for value in operand {
        results.push(evaluate_unary(ctx, op, value)?);
    }
    MemoryEntry::try_from_values(results)
}

/// Apply `op` to a single value.
pub fn evaluate_unary(ctx: &mut EvalContext<'_>, op: UnaryOp, value: &Value) -> EvalResult {
    let value = value.clone().normalized();
    if value.is_non_data() {
        return Err(invalid_expression_value(&value));
    }
    match op {
        UnaryOp::Plus => Ok(plus(ctx, &value)),
        UnaryOp::Minus => Ok(minus(ctx, &value)),
        UnaryOp::BitNegation => Ok(bit_negation(ctx, &value)),
        UnaryOp::LogicNegation => {
            let truth = to_boolean(ctx, &value)?;
            Ok(truth_value(ctx, truth.map(|b| !b)))
        }
        UnaryOp::BoolCast => {
            let truth = to_boolean(ctx, &value)?;
            Ok(truth_value(ctx, truth))
        }
        UnaryOp::Int32Cast => integer_cast(ctx, &value),
        UnaryOp::FloatCast | UnaryOp::DoubleCast => float_cast(ctx, &value),
        UnaryOp::StringCast | UnaryOp::UnicodeCast => evaluate_to_string(ctx, &value),
        UnaryOp::ObjectCast => to_object(ctx, &value),
        UnaryOp::ArrayCast => to_array(ctx, &value),
        UnaryOp::UnsetCast => Ok(ctx.outset().undefined_value()),
        UnaryOp::Clone => Ok(clone(ctx, &value)),
        UnaryOp::Print => Ok(ctx.outset().create_bool(false)),
        UnaryOp::AtSign => Ok(value),
        UnaryOp::Int8Cast
        | UnaryOp::Int16Cast
        | UnaryOp::Int64Cast
        | UnaryOp::UInt8Cast
        | UnaryOp::UInt16Cast
        | UnaryOp::UInt32Cast
        | UnaryOp::UInt64Cast
        | UnaryOp::BinaryCast => {
            tracing::warn!(op = op.as_symbol(), "unsupported cast");
            Err(not_supported(format!("{} cast", op.as_symbol())))
        }
    }
}

/// Report `message` and give up on the result.
fn degrade(ctx: &mut EvalContext<'_>, message: &str, cause: WarningCause) -> Value {
    ctx.warn(message, cause);
    ctx.outset().any_value()
}

/// Negate an integer, promoting to float on overflow.
fn negate_int(ctx: &mut EvalContext<'_>, n: i32) -> Value {
    match n.checked_neg() {
        Some(negated) => ctx.outset().create_int(negated),
        None => ctx.outset().create_double(-f64::from(n)),
    }
}

/// Numeric value of a string operand of `+` or `-`.
fn string_number(ctx: &mut EvalContext<'_>, text: &str) -> Value {
    let parsed = try_convert_to_number(text, true);
    if parsed.is_integer {
        ctx.outset().create_int(parsed.integer)
    } else {
        ctx.outset().create_double(parsed.float)
    }
}

fn plus(ctx: &mut EvalContext<'_>, value: &Value) -> Value {
    match value {
        Value::Bool(b) => ctx.outset().create_int(i32::from(*b)),
        Value::Int(_)
        | Value::Long(_)
        | Value::Float(_)
        | Value::IntInterval(_)
        | Value::LongInterval(_)
        | Value::FloatInterval(_)
        | Value::Any(AnyKind::Integer | AnyKind::Longint | AnyKind::Float) => value.clone(),
        Value::Str(s) => string_number(ctx, s),
        Value::Undefined => ctx.outset().create_int(0),
        Value::Resource(id) => match i32::try_from(id.raw()) {
            Ok(n) => ctx.outset().create_int(n),
            Err(_) => ctx.outset().any_integer_value(),
        },
        Value::Array(_) | Value::Any(AnyKind::Array) => degrade(
            ctx,
            "Unsupported operand types: Unary plus of array",
            WarningCause::UnsupportedOperandTypes,
        ),
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn(
                "Object cannot be converted to integer by unary plus operation",
                WarningCause::ObjectConvertedToInteger,
            );
            ctx.outset().any_integer_value()
        }
        Value::Any(AnyKind::Boolean) => ctx.outset().create_integer_interval(0, 1),
        Value::Any(AnyKind::Resource) => ctx.outset().any_integer_value(),
        Value::Any(AnyKind::String | AnyKind::Scalar | AnyKind::Compound | AnyKind::Value) => {
            ctx.outset().any_value()
        }
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            ctx.outset().any_value()
        }
    }
}

fn minus(ctx: &mut EvalContext<'_>, value: &Value) -> Value {
    match value {
        Value::Bool(b) => negate_int(ctx, i32::from(*b)),
        Value::Int(n) => negate_int(ctx, *n),
        Value::Long(n) => match n.checked_neg() {
            Some(negated) => ctx.outset().create_long(negated),
            None => ctx.outset().create_double(-long_to_float(*n)),
        },
        Value::Float(x) => ctx.outset().create_double(-x),
        Value::Str(s) => match string_number(ctx, s) {
            Value::Int(n) => negate_int(ctx, n),
            Value::Float(x) => ctx.outset().create_double(-x),
            other => other,
        },
        Value::Undefined => ctx.outset().create_int(0),
        Value::Resource(id) => match i32::try_from(id.raw()) {
            Ok(n) => negate_int(ctx, n),
            Err(_) => ctx.outset().any_integer_value(),
        },
        Value::IntInterval(interval) => negate_int_interval(ctx, *interval),
        Value::LongInterval(interval) => {
            let (start, end) = (interval.start(), interval.end());
            match (end.checked_neg(), start.checked_neg()) {
                (Some(low), Some(high)) => ctx.outset().create_longint_interval(low, high),
                (low, _) => {
                    let low = low.map_or(-long_to_float(end), long_to_float);
                    ctx.outset().create_float_interval(low, -long_to_float(start))
                }
            }
        }
        Value::FloatInterval(interval) => ctx
            .outset()
            .create_float_interval(-interval.end(), -interval.start()),
        Value::Array(_) | Value::Any(AnyKind::Array) => degrade(
            ctx,
            "Unsupported operand types: Unary minus of array",
            WarningCause::UnsupportedOperandTypes,
        ),
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn(
                "Object cannot be converted to integer by unary minus operation",
                WarningCause::ObjectConvertedToInteger,
            );
            ctx.outset().any_integer_value()
        }
        Value::Any(AnyKind::Boolean) => ctx.outset().create_integer_interval(-1, 0),
        Value::Any(AnyKind::Integer | AnyKind::Resource) => ctx.outset().any_integer_value(),
        Value::Any(AnyKind::Longint) => ctx.outset().any_longint_value(),
        Value::Any(AnyKind::Float) => ctx.outset().any_float_value(),
        Value::Any(AnyKind::String | AnyKind::Scalar | AnyKind::Compound | AnyKind::Value) => {
            ctx.outset().any_value()
        }
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            ctx.outset().any_value()
        }
    }
}

/// `-[a, b]` is `[-b, -a]`; a start of `i32::MIN` forces a float interval.
fn negate_int_interval(ctx: &mut EvalContext<'_>, interval: Interval<i32>) -> Value {
    let (start, end) = (interval.start(), interval.end());
    match (end.checked_neg(), start.checked_neg()) {
        (Some(low), Some(high)) => ctx.outset().create_integer_interval(low, high),
        (low, _) => {
            let low = low.map_or(-f64::from(end), f64::from);
            ctx.outset().create_float_interval(low, -f64::from(start))
        }
    }
}

fn bit_negation(ctx: &mut EvalContext<'_>, value: &Value) -> Value {
    const BOOLEAN: &str = "Unsupported operand types: Bit negation of boolean value";
    const COMPOUND: &str = "Unsupported operand types: Bit negation of compound value";
    const RESOURCE: &str = "Unsupported operand types: Bit negation of resource reference";
    const NULL: &str = "Unsupported operand types: Bit negation of null value";

    match value {
        Value::Int(n) => ctx.outset().create_int(!n),
        Value::Long(n) => ctx.outset().create_long(!n),
        Value::Float(_) | Value::FloatInterval(_) => match to_integer_interval(value) {
            Some(interval) => ctx
                .outset()
                .create_integer_interval(!interval.end(), !interval.start()),
            None => ctx.outset().any_integer_value(),
        },
        Value::IntInterval(interval) => ctx
            .outset()
            .create_integer_interval(!interval.end(), !interval.start()),
        Value::LongInterval(interval) => ctx
            .outset()
            .create_longint_interval(!interval.end(), !interval.start()),
        // Strings negate byte-wise; the result is rarely valid text.
        Value::Str(_) | Value::Any(AnyKind::String) => ctx.outset().any_string_value(),
        Value::Bool(_) | Value::Any(AnyKind::Boolean) => {
            degrade(ctx, BOOLEAN, WarningCause::UnsupportedOperandTypes)
        }
        Value::Array(_)
        | Value::Object(_)
        | Value::Any(AnyKind::Array | AnyKind::Object | AnyKind::Compound) => {
            degrade(ctx, COMPOUND, WarningCause::UnsupportedOperandTypes)
        }
        Value::Resource(_) | Value::Any(AnyKind::Resource) => {
            degrade(ctx, RESOURCE, WarningCause::UnsupportedOperandTypes)
        }
        Value::Undefined => degrade(ctx, NULL, WarningCause::UnsupportedOperandTypes),
        Value::Any(AnyKind::Integer | AnyKind::Float) => ctx.outset().any_integer_value(),
        Value::Any(AnyKind::Longint) => ctx.outset().any_longint_value(),
        Value::Any(AnyKind::Scalar | AnyKind::Value) => ctx.outset().any_value(),
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            ctx.outset().any_value()
        }
    }
}

fn integer_cast(ctx: &mut EvalContext<'_>, value: &Value) -> EvalResult {
    if let Some(n) = to_integer(ctx, value)? {
        return Ok(ctx.outset().create_int(n));
    }
    Ok(match value {
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn(
                "Object cannot be converted to integer",
                WarningCause::ObjectConvertedToInteger,
            );
            ctx.outset().any_integer_value()
        }
        Value::Any(AnyKind::Boolean) => ctx.outset().create_integer_interval(0, 1),
        _ => match to_integer_interval(value) {
            Some(interval) => ctx
                .outset()
                .create_integer_interval(interval.start(), interval.end()),
            None => ctx.outset().any_integer_value(),
        },
    })
}

fn float_cast(ctx: &mut EvalContext<'_>, value: &Value) -> EvalResult {
    if let Some(x) = to_float(ctx, value)? {
        return Ok(ctx.outset().create_double(x));
    }
    Ok(match value {
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn("Object cannot be converted to float", WarningCause::ObjectConvertedToInteger);
            ctx.outset().any_float_value()
        }
        Value::Any(AnyKind::Boolean) => ctx.outset().create_float_interval(0.0, 1.0),
        _ => match to_float_interval(value) {
            Some(interval) => ctx
                .outset()
                .create_float_interval(interval.start(), interval.end()),
            None => ctx.outset().any_float_value(),
        },
    })
}

/// `clone $value`: a shallow copy of an object, a warning for anything else.
fn clone(ctx: &mut EvalContext<'_>, value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let copy = ctx.outset().create_object(&object.class);
            let source = EntryPath::of_value(value.clone());
            let fields = ctx.snapshot().iterate_fields(&source);
            let target = EntryPath::of_value(copy.clone());
            copy_members(ctx, &source, fields, EntryPath::read_field, &target, EntryPath::read_field);
            copy
        }
        Value::Any(AnyKind::Object) => ctx.outset().any_object_value(),
        _ => degrade(
            ctx,
            "__clone method called on non-object",
            WarningCause::CloneNonObject,
        ),
    }
}

