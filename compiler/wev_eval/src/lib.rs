#![deny(clippy::arithmetic_side_effects)]
//! Wev Eval - conversions and operator evaluation over the Weverca value lattice.
//!
//! This crate provides the transfer functions of the analyzer's expression
//! evaluation: every operator and conversion maps abstract operands to a
//! sound abstract result.
//!
//! # Architecture
//!
//! Evaluators are free functions taking an explicit [`EvalContext`]:
//! - `conversion`: boolean, integer, float, string, object and array
//!   conversions, plus the numeric-prefix parser
//! - `evaluate_unary` / `evaluate_incdec`: single-operand operators
//! - `evaluate_binary`: enum-based dispatch on operator, then on both operands
//! - `boolean` / `string`: whole-entry truth values and concatenation
//! - `array_index`: index classification and array-literal keys
//!
//! Every evaluator has an entry-level form (`*_entry`) that applies it to
//! each possible operand value and unions the results.
//!
//! # Re-exports
//!
//! Lattice types come from `wev_values`:
//! - `Value`, `AnyKind`, `Interval`, `MemoryEntry`, `MemberIdentifier`
//! - `OutputSet`, `MemoryOutputSet`, `EntryPath`
//! - `EvalError`, `EvalResult`

mod array_index;
mod binary;
mod boolean;
mod context;
pub mod conversion;
mod incdec;
mod options;
mod string;
mod tracing_setup;
mod unary;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

pub use wev_values::{
    AnalysisWarning, AnyKind, BinaryOp, EntryPath, EvalError, EvalResult, IncDecOp, Interval,
    MemberIdentifier, MemoryEntry, MemoryOutputSet, OutputSet, UnaryOp, Value, WarningCause,
    WarningSink,
};

pub use array_index::{
    evaluate_array_literal, evaluate_index_entry, evaluate_to_identifiers, implicit_array_keys,
    IndexClassification, IndexFlags, IndexKey,
};
pub use binary::{evaluate_binary, evaluate_binary_entry};
pub use boolean::{
    entry_truth, evaluate_logical_entry, evaluate_to_boolean, logical, truth_value, value_truth,
    LogicalOp,
};
pub use context::EvalContext;
pub use incdec::{evaluate_incdec, evaluate_incdec_entry};
pub use options::EvalOptions;
pub use string::{
    concat_entries, concat_values, entry_strings, evaluate_entry_to_string, evaluate_to_string,
    EntryStrings,
};
pub use tracing_setup::init_tracing;
pub use unary::{evaluate_unary, evaluate_unary_entry};
