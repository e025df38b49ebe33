#![deny(clippy::arithmetic_side_effects)]
//! Wev Values - the abstract value lattice of the Weverca evaluator.
//!
//! This crate provides:
//! - The value lattice (`Value`, `AnyKind`, `Interval`, compound identities)
//! - Sets of possible values (`MemoryEntry`) and resolved member keys
//!   (`MemberIdentifier`)
//! - Operator enums shared by every evaluator (`BinaryOp`, `UnaryOp`, `IncDecOp`)
//! - Collaborator contracts: the `OutputSet` factory/snapshot interface and the
//!   `WarningSink` diagnostic sink
//! - Evaluation error types (`EvalError`, `EvalResult`)
//! - `MemoryOutputSet`, a small in-memory output set
//!
//! # Lattice
//!
//! ```text
//! AnyValue
//! ├── Undefined
//! ├── AnyScalar
//! │   ├── AnyBoolean ── Bool
//! │   ├── AnyInteger ── IntInterval ── Int
//! │   ├── AnyLongint ── LongInterval ── Long
//! │   ├── AnyFloat ──── FloatInterval ── Float
//! │   └── AnyString ─── Str
//! └── AnyCompound
//!     ├── AnyArray ──── Array
//!     ├── AnyObject ─── Object
//!     └── AnyResource ─ Resource
//! ```
//!
//! Function, lambda, type and special values are analysis markers outside the
//! lattice; evaluators reject them inside expressions.

mod diagnostic;
mod entry;
mod errors;
mod memory;
mod operators;
mod outset;
mod value;

pub use diagnostic::{AnalysisWarning, WarningCause, WarningSink};
pub use entry::{MemberIdentifier, MemoryEntry};
pub use errors::{empty_entry, invalid_expression_value, not_supported, EvalError, EvalResult};
pub use memory::MemoryOutputSet;
pub use operators::{BinaryOp, IncDecOp, UnaryOp};
pub use outset::{EntryPath, OutputSet, PathStep};
pub use value::{
    AnyKind, ArrayId, ClassName, Interval, IntervalBound, ObjectId, ObjectRef, ResourceId,
    TypeFamilies, Value,
};
