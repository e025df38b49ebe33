//! Value conversions.
//!
//! Scalar conversions answer `Ok(None)` when the value has no single result
//! of the target type (an abstract value, or a float outside the integer
//! range); callers substitute the matching "any" value. Only analysis
//! markers are errors.
//!
//! Structural conversions (`to_object`, `to_array`) allocate a new compound
//! through the output set and copy members through the snapshot.

mod number_parse;

use wev_values::{
    invalid_expression_value, AnyKind, ClassName, EntryPath, EvalResult, Interval,
    MemberIdentifier, Value,
};

use crate::EvalContext;

pub use number_parse::{
    string_to_float, string_to_integer, try_convert_to_float, try_convert_to_integer,
    try_convert_to_number, ParsedNumber,
};

/// Field that holds a scalar converted to an object.
pub const SCALAR_FIELD: &str = "scalar";

/// Truncate toward zero; `None` if the result does not fit in 32 bits.
#[expect(clippy::cast_possible_truncation, reason = "range checked before the cast")]
pub fn float_to_integer(value: f64) -> Option<i32> {
    let truncated = value.trunc();
    if truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
        Some(truncated as i32)
    } else {
        None
    }
}

/// Truncate toward zero; `None` if the result does not fit in 64 bits.
#[expect(clippy::cast_possible_truncation, reason = "range checked before the cast")]
pub fn float_to_long(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if truncated >= -LIMIT && truncated < LIMIT {
        Some(truncated as i64)
    } else {
        None
    }
}

pub fn long_to_integer(value: i64) -> Option<i32> {
    i32::try_from(value).ok()
}

#[expect(clippy::cast_precision_loss, reason = "long to float conversion is lossy by definition")]
pub fn long_to_float(value: i64) -> f64 {
    value as f64
}

fn array_is_empty(ctx: &EvalContext<'_>, value: &Value) -> bool {
    ctx.snapshot()
        .iterate_indexes(&EntryPath::of_value(value.clone()))
        .is_empty()
}

/// Truth value of `value`.
pub fn to_boolean(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Option<bool>> {
    let truth = match value {
        Value::Bool(b) => Some(*b),
        Value::Int(n) => Some(*n != 0),
        Value::Long(n) => Some(*n != 0),
        Value::Float(x) => Some(*x != 0.0),
        Value::Str(s) => Some(!s.is_empty() && s != "0"),
        Value::Array(_) => Some(!array_is_empty(ctx, value)),
        Value::Object(_) | Value::Resource(_) | Value::Any(AnyKind::Object | AnyKind::Resource) => {
            Some(true)
        }
        Value::Undefined => Some(false),
        Value::IntInterval(i) => interval_truth(i.is_zero(), i.contains_zero()),
        Value::LongInterval(i) => interval_truth(i.is_zero(), i.contains_zero()),
        Value::FloatInterval(i) => interval_truth(i.is_zero(), i.contains_zero()),
        Value::Any(_) => None,
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(value));
        }
    };
    Ok(truth)
}

fn interval_truth(is_zero: bool, contains_zero: bool) -> Option<bool> {
    if is_zero {
        Some(false)
    } else if contains_zero {
        None
    } else {
        Some(true)
    }
}

/// The `(int)` conversion of `value`.
pub fn to_integer(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Option<i32>> {
    let integer = match value {
        Value::Bool(b) => Some(i32::from(*b)),
        Value::Int(n) => Some(*n),
        Value::Long(n) => long_to_integer(*n),
        Value::Float(x) => float_to_integer(*x),
        Value::Str(s) => string_to_integer(s),
        Value::Array(_) => Some(i32::from(!array_is_empty(ctx, value))),
        Value::Resource(id) => i32::try_from(id.raw()).ok(),
        Value::Undefined => Some(0),
        Value::Object(_)
        | Value::IntInterval(_)
        | Value::LongInterval(_)
        | Value::FloatInterval(_)
        | Value::Any(_) => None,
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(value));
        }
    };
    Ok(integer)
}

/// The `(float)` conversion of `value`.
pub fn to_float(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Option<f64>> {
    let float = match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Some(f64::from(*n)),
        Value::Long(n) => Some(long_to_float(*n)),
        Value::Float(x) => Some(*x),
        Value::Str(s) => Some(string_to_float(s)),
        Value::Array(_) => Some(if array_is_empty(ctx, value) { 0.0 } else { 1.0 }),
        Value::Resource(id) => Some(f64::from(id.raw())),
        Value::Undefined => Some(0.0),
        Value::Object(_)
        | Value::IntInterval(_)
        | Value::LongInterval(_)
        | Value::FloatInterval(_)
        | Value::Any(_) => None,
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(value));
        }
    };
    Ok(float)
}

/// Significant digits kept when a float becomes text.
const FLOAT_DIGITS: usize = 15;

/// Textual form of a float.
///
/// At most 15 significant digits. Exponents from -4 to 14 print in fixed
/// notation, anything else as `1.5E+20` or `1E-05`.
pub fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_owned();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}INF");
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let scientific = format!("{:.*e}", FLOAT_DIGITS.saturating_sub(1), value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    let text = match usize::try_from(exponent) {
        Ok(shift) if shift < FLOAT_DIGITS => {
            let int_len = shift.saturating_add(1);
            if digits.len() > int_len {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            } else {
                format!("{digits:0<int_len$}")
            }
        }
        Err(_) if exponent > -5 => {
            let leading = usize::try_from(exponent.unsigned_abs().saturating_sub(1)).unwrap_or(0);
            let zeros = "0".repeat(leading);
            format!("0.{zeros}{digits}")
        }
        _ => {
            let (first, rest) = digits.split_at(1);
            let point = if rest.is_empty() { "" } else { "." };
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            format!("{first}{point}{rest}E{exp_sign}{:02}", exponent.unsigned_abs())
        }
    };
    format!("{sign}{text}")
}

/// The `(string)` conversion of `value`.
///
/// Objects have no conversion without a user hook and yield `None`, as do
/// abstract values other than "any array".
pub fn to_string(value: &Value) -> EvalResult<Option<String>> {
    let text = match value {
        Value::Bool(true) => Some("1".to_owned()),
        Value::Bool(false) | Value::Undefined => Some(String::new()),
        Value::Int(n) => Some(n.to_string()),
        Value::Long(n) => Some(n.to_string()),
        Value::Float(x) => Some(float_to_string(*x)),
        Value::Str(s) => Some(s.clone()),
        Value::Array(_) | Value::Any(AnyKind::Array) => Some("Array".to_owned()),
        Value::Resource(id) => Some(format!("Resource id #{}", id.raw())),
        Value::Object(_)
        | Value::IntInterval(_)
        | Value::LongInterval(_)
        | Value::FloatInterval(_)
        | Value::Any(_) => None,
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(value));
        }
    };
    Ok(text)
}

/// Copy the members named by `keys` from `source` into `target`, one slot at a time.
pub(crate) fn copy_members(
    ctx: &mut EvalContext<'_>,
    source: &EntryPath,
    keys: Vec<String>,
    read: fn(&EntryPath, MemberIdentifier) -> EntryPath,
    target: &EntryPath,
    write: fn(&EntryPath, MemberIdentifier) -> EntryPath,
) {
    for key in keys {
        let member = ctx
            .snapshot()
            .read_memory(&read(source, MemberIdentifier::single(key.clone())));
        ctx.outset()
            .write_memory(&write(target, MemberIdentifier::single(key)), member);
    }
}

/// The `(object)` conversion of `value`.
pub fn to_object(ctx: &mut EvalContext<'_>, value: &Value) -> EvalResult {
    match value {
        Value::Object(_) => Ok(value.clone()),
        Value::Array(_) => {
            let object = ctx.outset().create_object(&ClassName::std_class());
            let source = EntryPath::of_value(value.clone());
            let keys = ctx.snapshot().iterate_indexes(&source);
            let target = EntryPath::of_value(object.clone());
            copy_members(ctx, &source, keys, EntryPath::read_index, &target, EntryPath::read_field);
            Ok(object)
        }
        Value::Undefined => Ok(ctx.outset().create_object(&ClassName::std_class())),
        Value::Bool(_)
        | Value::Int(_)
        | Value::Long(_)
        | Value::Float(_)
        | Value::Str(_)
        | Value::Resource(_) => {
            let object = ctx.outset().create_object(&ClassName::std_class());
            let field = EntryPath::of_value(object.clone())
                .read_field(MemberIdentifier::single(SCALAR_FIELD));
            ctx.outset().write_memory(&field, value.clone().into());
            Ok(object)
        }
        Value::IntInterval(_) | Value::LongInterval(_) | Value::FloatInterval(_) | Value::Any(_) => {
            Ok(ctx.outset().any_object_value())
        }
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            Err(invalid_expression_value(value))
        }
    }
}

/// The `(array)` conversion of `value`.
pub fn to_array(ctx: &mut EvalContext<'_>, value: &Value) -> EvalResult {
    match value {
        Value::Array(_) => Ok(value.clone()),
        Value::Object(_) => {
            let array = ctx.outset().create_array();
            let source = EntryPath::of_value(value.clone());
            let keys = ctx.snapshot().iterate_fields(&source);
            let target = EntryPath::of_value(array.clone());
            copy_members(ctx, &source, keys, EntryPath::read_field, &target, EntryPath::read_index);
            Ok(array)
        }
        Value::Undefined => Ok(ctx.outset().create_array()),
        Value::Bool(_)
        | Value::Int(_)
        | Value::Long(_)
        | Value::Float(_)
        | Value::Str(_)
        | Value::Resource(_) => {
            let array = ctx.outset().create_array();
            let slot = EntryPath::of_value(array.clone()).read_index(MemberIdentifier::single("0"));
            ctx.outset().write_memory(&slot, value.clone().into());
            Ok(array)
        }
        Value::IntInterval(_) | Value::LongInterval(_) | Value::FloatInterval(_) | Value::Any(_) => {
            Ok(ctx.outset().any_array_value())
        }
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            Err(invalid_expression_value(value))
        }
    }
}

/// Endpoint-wise integer conversion of a numeric interval or point.
///
/// `None` if either endpoint does not fit; the whole interval then falls
/// back to "any integer".
pub fn to_integer_interval(value: &Value) -> Option<Interval<i32>> {
    match value {
        Value::Int(n) => Interval::point(*n),
        Value::IntInterval(interval) => Some(*interval),
        Value::Long(n) => long_to_integer(*n).and_then(Interval::point),
        Value::LongInterval(interval) => Interval::new(
            long_to_integer(interval.start())?,
            long_to_integer(interval.end())?,
        ),
        Value::Float(x) => float_to_integer(*x).and_then(Interval::point),
        Value::FloatInterval(interval) => Interval::new(
            float_to_integer(interval.start())?,
            float_to_integer(interval.end())?,
        ),
        _ => None,
    }
}

/// Endpoint-wise float conversion of a numeric interval or point.
pub fn to_float_interval(value: &Value) -> Option<Interval<f64>> {
    match value {
        Value::Int(n) => Interval::point(f64::from(*n)),
        Value::IntInterval(interval) => {
            Interval::new(f64::from(interval.start()), f64::from(interval.end()))
        }
        Value::Long(n) => Interval::point(long_to_float(*n)),
        Value::LongInterval(interval) => {
            Interval::new(long_to_float(interval.start()), long_to_float(interval.end()))
        }
        Value::Float(x) => Interval::point(*x),
        Value::FloatInterval(interval) => Some(*interval),
        _ => None,
    }
}

/// Endpoint-wise long integer conversion of a numeric interval or point.
pub fn to_longint_interval(value: &Value) -> Option<Interval<i64>> {
    match value {
        Value::Int(n) => Interval::point(i64::from(*n)),
        Value::IntInterval(interval) => {
            Interval::new(i64::from(interval.start()), i64::from(interval.end()))
        }
        Value::Long(n) => Interval::point(*n),
        Value::LongInterval(interval) => Some(*interval),
        Value::Float(x) => float_to_long(*x).and_then(Interval::point),
        Value::FloatInterval(interval) => Interval::new(
            float_to_long(interval.start())?,
            float_to_long(interval.end())?,
        ),
        _ => None,
    }
}
