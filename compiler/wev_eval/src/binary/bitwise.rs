//! `&`, `|`, `^`, `<<` and `>>`.

use wev_values::{AnyKind, BinaryOp, EntryPath, TypeFamilies, Value, WarningCause};

use crate::conversion::{float_to_integer, string_to_integer};
use crate::EvalContext;

fn operand(ctx: &mut EvalContext<'_>, value: &Value) -> Option<i32> {
    match value {
        Value::Bool(b) => Some(i32::from(*b)),
        Value::Undefined => Some(0),
        Value::Int(n) => Some(*n),
        Value::Float(x) => float_to_integer(*x),
        Value::Str(s) => string_to_integer(s),
        Value::Resource(id) => i32::try_from(id.raw()).ok(),
        Value::Array(_) => {
            let keys = ctx
                .snapshot()
                .iterate_indexes(&EntryPath::of_value(value.clone()));
            Some(i32::from(!keys.is_empty()))
        }
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            ctx.warn(
                "Object cannot be converted to integer by bitwise operation",
                WarningCause::ObjectConvertedToInteger,
            );
            None
        }
        _ => None,
    }
}

/// Two strings under `&`, `|` or `^` combine character by character.
fn is_string_operation(op: BinaryOp, left: &Value, right: &Value) -> bool {
    matches!(op, BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor)
        && left.families() == TypeFamilies::STRING
        && right.families() == TypeFamilies::STRING
}

pub(super) fn evaluate(ctx: &mut EvalContext<'_>, op: BinaryOp, left: &Value, right: &Value) -> Value {
    if is_string_operation(op, left, right) {
        return ctx.snapshot().any_string_value();
    }
    let l = operand(ctx, left);
    let r = operand(ctx, right);
    match (l, r) {
        (Some(a), Some(b)) => ctx.snapshot().create_int(apply(op, a, b)),
        _ => ctx.snapshot().any_integer_value(),
    }
}

/// Shift counts use their low five bits.
#[expect(clippy::cast_sign_loss, reason = "shift counts are masked to five bits")]
fn apply(op: BinaryOp, a: i32, b: i32) -> i32 {
    match op {
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitOr => a | b,
        BinaryOp::BitXor => a ^ b,
        BinaryOp::ShiftLeft => a.wrapping_shl(b as u32),
        _ => a.wrapping_shr(b as u32),
    }
}
