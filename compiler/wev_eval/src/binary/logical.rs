//! Logical operators over single values.

use wev_values::{BinaryOp, EvalResult, Value};

use crate::boolean::{logical, truth_value, value_truth, LogicalOp};
use crate::EvalContext;

pub(super) fn evaluate(
    ctx: &EvalContext<'_>,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult {
    let Some(op) = LogicalOp::from_binary(op) else {
        return Ok(ctx.snapshot().any_boolean_value());
    };
    let left = value_truth(ctx, left)?;
    let truth = match (op, left) {
        (LogicalOp::And, Some(false)) => Some(false),
        (LogicalOp::Or, Some(true)) => Some(true),
        _ => logical(op, left, value_truth(ctx, right)?),
    };
    Ok(truth_value(ctx, truth))
}
