//! Truth values of entries and three-valued logic.
//!
//! A truth value is `Option<bool>`: `None` means the operand may be either.
//! Combining an entry tracks whether any member may be true and whether any
//! member may be false; a member without a definite truth value contributes
//! both.

use wev_values::{not_supported, BinaryOp, EvalResult, MemoryEntry, Value};

use crate::conversion::to_boolean;
use crate::EvalContext;

/// Logical binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
    Xor,
}

impl LogicalOp {
    pub fn from_binary(op: BinaryOp) -> Option<Self> {
        match op {
            BinaryOp::And => Some(Self::And),
            BinaryOp::Or => Some(Self::Or),
            BinaryOp::Xor => Some(Self::Xor),
            _ => None,
        }
    }
}

/// Three-valued `and`, `or` and `xor`.
pub fn logical(op: LogicalOp, left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match op {
        LogicalOp::And => match (left, right) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        },
        LogicalOp::Or => match (left, right) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        },
        LogicalOp::Xor => Some(left? != right?),
    }
}

/// Truth value of a single operand of a logical operator.
pub fn value_truth(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Option<bool>> {
    if matches!(value, Value::LambdaFunction(_)) {
        return Err(not_supported("lambda function as a logical operand"));
    }
    to_boolean(ctx, value)
}

/// Truth value shared by every member of `entry`, if there is one.
pub fn entry_truth(ctx: &EvalContext<'_>, entry: &MemoryEntry) -> EvalResult<Option<bool>> {
    let mut is_not_true = true;
    let mut is_not_false = true;
    for value in entry {
        match value_truth(ctx, value)? {
            Some(true) => is_not_true = false,
            Some(false) => is_not_false = false,
            None => {
                is_not_true = false;
                is_not_false = false;
            }
        }
    }
    Ok(match (is_not_true, is_not_false) {
        (false, true) => Some(true),
        (true, false) => Some(false),
        _ => None,
    })
}

/// The boolean value for a truth value: concrete, or "any boolean".
pub fn truth_value(ctx: &EvalContext<'_>, truth: Option<bool>) -> Value {
    match truth {
        Some(b) => ctx.snapshot().create_bool(b),
        None => ctx.snapshot().any_boolean_value(),
    }
}

/// Convert every possible value of `entry` to a single boolean value.
pub fn evaluate_to_boolean(ctx: &EvalContext<'_>, entry: &MemoryEntry) -> EvalResult {
    entry_truth(ctx, entry).map(|truth| truth_value(ctx, truth))
}

/// Short-circuiting logical operator over entries.
///
/// The right entry is only inspected when the left one does not already
/// decide the result.
pub fn evaluate_logical_entry(
    ctx: &EvalContext<'_>,
    op: LogicalOp,
    left: &MemoryEntry,
    right: &MemoryEntry,
) -> EvalResult {
    let left = entry_truth(ctx, left)?;
    let decided = match (op, left) {
        (LogicalOp::And, Some(false)) => Some(false),
        (LogicalOp::Or, Some(true)) => Some(true),
        _ => None,
    };
    if decided.is_some() {
        return Ok(truth_value(ctx, decided));
    }
    let right = entry_truth(ctx, right)?;
    Ok(truth_value(ctx, logical(op, left, right)))
}
