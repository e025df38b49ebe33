//! Evaluator tests kept out of the implementation files.
//!
//! Operator families with large case tables get their own file here; small
//! modules keep an inline `tests` module.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod binary_tests;
