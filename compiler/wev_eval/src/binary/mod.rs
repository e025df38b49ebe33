//! Binary operators.
//!
//! # Architecture
//!
//! Dispatch is two-level, like a table indexed by operator and both operand
//! kinds: `evaluate_binary` picks the operator family, and each family
//! matches on the pair of operands.
//!
//! - `comparison`: `===`, `!==`, `==`, `!=`, `<`, `<=`, `>`, `>=`
//! - `arithmetic`: `+`, `-`, `*`, `/`
//! - `modulo`: `%`
//! - `bitwise`: `&`, `|`, `^`, `<<`, `>>`
//! - `logical`: `and`, `or`, `xor`
//!
//! Concatenation goes through the string converter instead. Operations on
//! long integers are not modelled and fail with `NotSupported`.

mod arithmetic;
mod bitwise;
mod comparison;
mod logical;
mod modulo;

use wev_values::{
    invalid_expression_value, not_supported, BinaryOp, EvalResult, MemoryEntry, Value,
};

use crate::boolean::{evaluate_logical_entry, LogicalOp};
use crate::string::{concat_entries, concat_values};
use crate::EvalContext;

/// Apply `op` to every pair of possible operand values.
///
/// Concatenation and logical operators work on whole entries, so a logical
/// operator short-circuits on the left entry as a whole.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn evaluate_binary_entry(
    ctx: &mut EvalContext<'_>,
    left: &MemoryEntry,
    op: BinaryOp,
    right: &MemoryEntry,
) -> EvalResult<MemoryEntry> {
    if op == BinaryOp::Concat {
        return concat_entries(ctx, left, right);
    }
    if let Some(logical) = LogicalOp::from_binary(op) {
        return evaluate_logical_entry(ctx, logical, left, right).map(MemoryEntry::new);
    }
    let mut results = Vec::with_capacity(left.count().saturating_mul(right.count()));
    for l in left {
        for r in right {
            results.push(evaluate_binary(ctx, l, op, r)?);
        }
    }
    MemoryEntry::try_from_values(results)
}

/// Apply `op` to a single pair of values.
pub fn evaluate_binary(
    ctx: &mut EvalContext<'_>,
    left: &Value,
    op: BinaryOp,
    right: &Value,
) -> EvalResult {
    let left = left.clone().normalized();
    let right = right.clone().normalized();
    for operand in [&left, &right] {
        if operand.is_non_data() && !matches!(operand, Value::LambdaFunction(_)) {
            return Err(invalid_expression_value(operand));
        }
    }

    match op {
        BinaryOp::Concat => concat_values(ctx, &left, &right),
        _ if op.is_logical() => logical::evaluate(ctx, op, &left, &right),
        _ if left.is_non_data() || right.is_non_data() => Err(invalid_expression_value(
            if left.is_non_data() { &left } else { &right },
        )),
        _ if left.is_long_like() || right.is_long_like() => {
            tracing::warn!(
                op = op.as_symbol(),
                left = left.kind_name(),
                right = right.kind_name(),
                "long integer operands"
            );
            Err(not_supported("long integer operands"))
        }
        _ if op.is_identity() => Ok(comparison::identity(ctx, op, &left, &right)),
        _ if op.is_comparison() => comparison::compare(ctx, op, &left, &right),
        _ if op.is_arithmetic() => Ok(arithmetic::evaluate(ctx, op, &left, &right)),
        _ if op.is_bitwise() => Ok(bitwise::evaluate(ctx, op, &left, &right)),
        _ => Ok(modulo::evaluate(ctx, &left, &right)),
    }
}
