//! Error types for evaluation.
//!
//! Only two situations are errors; everything else degrades to a
//! conservative abstract value and, at most, a warning:
//!
//! - a value that can never appear in a well-formed expression
//!   (`InvalidExpressionValue`), and
//! - an operand combination the evaluator does not model and for which no
//!   sound fallback is allowed (`NotSupported`).
//!
//! Factory functions are the public API, mirroring how call sites read:
//! `return Err(not_supported("long integer operands"))`.

use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A function, type or marker value inside an expression.
    #[error("{kind} cannot be used as an expression value")]
    InvalidExpressionValue { kind: &'static str },

    /// An operand combination that is deliberately not modelled.
    #[error("{feature} is not supported")]
    NotSupported { feature: String },

    /// An operation produced no possible value.
    #[error("expression has no possible value")]
    EmptyEntry,
}

/// A non-data value reached an operator.
#[cold]
pub fn invalid_expression_value(value: &Value) -> EvalError {
    EvalError::InvalidExpressionValue {
        kind: value.kind_name(),
    }
}

/// An operand combination that is not modelled.
#[cold]
pub fn not_supported(feature: impl Into<String>) -> EvalError {
    EvalError::NotSupported {
        feature: feature.into(),
    }
}

/// An operation produced an empty set of values.
#[cold]
pub fn empty_entry() -> EvalError {
    EvalError::EmptyEntry
}
