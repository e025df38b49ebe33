//! `+`, `-`, `*` and `/`.
//!
//! Integer results that leave the 32-bit range promote to float. Operands
//! with more than one possible value are evaluated by interval corners.

use wev_values::{AnyKind, BinaryOp, EntryPath, Value, WarningCause};

use crate::conversion::{copy_members, try_convert_to_number};
use crate::EvalContext;

/// Numeric view of an arithmetic operand.
#[derive(Copy, Clone, Debug)]
enum Operand {
    Int(i32),
    Float(f64),
    IntRange(i32, i32),
    FloatRange(f64, f64),
    AnyFloat,
    Unknown,
}

impl Operand {
    fn of(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Operand::Int(i32::from(*b)),
            Value::Undefined => Operand::Int(0),
            Value::Int(n) => Operand::Int(*n),
            Value::Float(x) => Operand::Float(*x),
            Value::Str(s) => {
                let parsed = try_convert_to_number(s, true);
                if parsed.is_integer {
                    Operand::Int(parsed.integer)
                } else {
                    Operand::Float(parsed.float)
                }
            }
            Value::Resource(id) => i32::try_from(id.raw()).map_or(Operand::Unknown, Operand::Int),
            Value::IntInterval(i) => Operand::IntRange(i.start(), i.end()),
            Value::FloatInterval(i) => Operand::FloatRange(i.start(), i.end()),
            Value::Any(AnyKind::Boolean) => Operand::IntRange(0, 1),
            Value::Any(AnyKind::Integer) => Operand::IntRange(i32::MIN, i32::MAX),
            Value::Any(AnyKind::Float) => Operand::AnyFloat,
            _ => Operand::Unknown,
        }
    }

    fn may_be_zero(self) -> bool {
        match self {
            Operand::Int(n) => n == 0,
            Operand::Float(x) => x == 0.0,
            Operand::IntRange(a, b) => a <= 0 && b >= 0,
            Operand::FloatRange(a, b) => a <= 0.0 && b >= 0.0,
            Operand::AnyFloat | Operand::Unknown => true,
        }
    }

    fn range(self) -> Option<Range> {
        match self {
            Operand::Int(n) => Some(Range::Int(n, n)),
            Operand::Float(x) => Some(Range::Float(x, x)),
            Operand::IntRange(a, b) => Some(Range::Int(a, b)),
            Operand::FloatRange(a, b) => Some(Range::Float(a, b)),
            Operand::AnyFloat | Operand::Unknown => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Range {
    Int(i32, i32),
    Float(f64, f64),
}

impl Range {
    fn as_float(self) -> (f64, f64) {
        match self {
            Range::Int(a, b) => (f64::from(a), f64::from(b)),
            Range::Float(a, b) => (a, b),
        }
    }
}

pub(super) fn evaluate(ctx: &mut EvalContext<'_>, op: BinaryOp, left: &Value, right: &Value) -> Value {
    if left.is_array_like() || right.is_array_like() {
        return array_arithmetic(ctx, op, left, right);
    }
    if left.is_object_like() || right.is_object_like() {
        ctx.warn(
            "Object cannot be converted to integer by arithmetic operation",
            WarningCause::ObjectConvertedToInteger,
        );
        return ctx.snapshot().any_value();
    }

    let l = Operand::of(left);
    let r = Operand::of(right);
    if op == BinaryOp::Div && r.may_be_zero() {
        return division_by_zero(ctx, r);
    }

    match (l, r) {
        (Operand::Unknown, _) | (_, Operand::Unknown) => ctx.snapshot().any_value(),
        (Operand::Int(a), Operand::Int(b)) => integers(ctx, op, a, b),
        (Operand::Int(_) | Operand::Float(_), Operand::Int(_) | Operand::Float(_)) => {
            let (a, b) = (as_float(l), as_float(r));
            ctx.snapshot().create_double(apply(op, a, b))
        }
        (Operand::AnyFloat, _) | (_, Operand::AnyFloat) => ctx.snapshot().any_float_value(),
        _ => match (l.range(), r.range()) {
            (Some(l), Some(r)) => ranges(ctx, op, l, r),
            _ => ctx.snapshot().any_value(),
        },
    }
}

fn as_float(operand: Operand) -> f64 {
    match operand {
        Operand::Int(n) => f64::from(n),
        Operand::Float(x) => x,
        _ => f64::NAN,
    }
}

fn apply(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        _ => a / b,
    }
}

fn checked(op: BinaryOp, a: i32, b: i32) -> Option<i32> {
    match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        // Exact quotients only; `MIN / -1` overflows and falls through.
        _ => match a.checked_rem(b) {
            Some(0) => a.checked_div(b),
            _ => None,
        },
    }
}

fn integers(ctx: &EvalContext<'_>, op: BinaryOp, a: i32, b: i32) -> Value {
    match checked(op, a, b) {
        Some(n) => ctx.snapshot().create_int(n),
        None => ctx
            .snapshot()
            .create_double(apply(op, f64::from(a), f64::from(b))),
    }
}

fn ranges(ctx: &EvalContext<'_>, op: BinaryOp, left: Range, right: Range) -> Value {
    if let (Range::Int(a, b), Range::Int(c, d), false) = (left, right, op == BinaryOp::Div) {
        let corners = [
            checked(op, a, c),
            checked(op, a, d),
            checked(op, b, c),
            checked(op, b, d),
        ];
        if let Some(corners) = corners.into_iter().collect::<Option<Vec<_>>>() {
            let low = corners.iter().copied().min().unwrap_or(i32::MIN);
            let high = corners.iter().copied().max().unwrap_or(i32::MAX);
            return ctx.snapshot().create_integer_interval(low, high);
        }
    }

    let (a, b) = left.as_float();
    let (c, d) = right.as_float();
    let corners = [apply(op, a, c), apply(op, a, d), apply(op, b, c), apply(op, b, d)];
    if corners.iter().any(|x| x.is_nan()) {
        return ctx.snapshot().any_float_value();
    }
    let low = corners.iter().copied().fold(f64::INFINITY, f64::min);
    let high = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    ctx.snapshot().create_float_interval(low, high)
}

fn division_by_zero(ctx: &mut EvalContext<'_>, divisor: Operand) -> Value {
    match divisor {
        Operand::Int(_) => {
            ctx.warn("Division by zero", WarningCause::DivisionByZero);
            ctx.snapshot().create_bool(false)
        }
        Operand::Float(_) => {
            ctx.warn("Division by floating-point zero", WarningCause::DivisionByZero);
            ctx.snapshot().create_bool(false)
        }
        _ => {
            ctx.warn(
                "Division by any integer, possible division by zero",
                WarningCause::DivisionByZero,
            );
            ctx.snapshot().any_value()
        }
    }
}

fn array_arithmetic(ctx: &mut EvalContext<'_>, op: BinaryOp, left: &Value, right: &Value) -> Value {
    if op == BinaryOp::Add && left.is_array_like() && right.is_array_like() {
        return match (left, right) {
            (Value::Array(_), Value::Array(_)) if ctx.options().materialize_array_union() => {
                array_union(ctx, left, right)
            }
            _ => ctx.snapshot().any_array_value(),
        };
    }
    if left.may_be_array() && right.may_be_array() && !(left.is_array_like() && right.is_array_like())
    {
        return ctx.snapshot().any_value();
    }
    let message = format!(
        "Unsupported operand types: {} {} {}",
        left.kind_name(),
        op.as_symbol(),
        right.kind_name()
    );
    ctx.warn(&message, WarningCause::UnsupportedOperandTypes);
    ctx.snapshot().any_value()
}

/// `left + right` on two arrays: every key of `left`, then the keys of
/// `right` that `left` lacks.
fn array_union(ctx: &mut EvalContext<'_>, left: &Value, right: &Value) -> Value {
    let union = ctx.outset().create_array();
    let target = EntryPath::of_value(union.clone());
    let left = EntryPath::of_value(left.clone());
    let right = EntryPath::of_value(right.clone());

    let left_keys = ctx.snapshot().iterate_indexes(&left);
    let right_keys: Vec<String> = ctx
        .snapshot()
        .iterate_indexes(&right)
        .into_iter()
        .filter(|key| !left_keys.contains(key))
        .collect();
    copy_members(ctx, &left, left_keys, EntryPath::read_index, &target, EntryPath::read_index);
    copy_members(ctx, &right, right_keys, EntryPath::read_index, &target, EntryPath::read_index);
    union
}
