//! The explicit evaluation context.
//!
//! Evaluators are free functions; everything they need from the outside
//! world travels in an `EvalContext`: the output set that mints values and
//! owns storage, the sink that receives soft diagnostics, and the policy
//! switches.

use wev_values::{OutputSet, WarningCause, WarningSink};

use crate::EvalOptions;

/// Collaborators of one evaluation.
pub struct EvalContext<'a> {
    outset: &'a mut dyn OutputSet,
    warnings: &'a mut dyn WarningSink,
    options: EvalOptions,
}

impl<'a> EvalContext<'a> {
    /// Context with default options.
    pub fn new(outset: &'a mut dyn OutputSet, warnings: &'a mut dyn WarningSink) -> Self {
        Self {
            outset,
            warnings,
            options: EvalOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Output set, for value construction and snapshot writes.
    pub fn outset(&mut self) -> &mut (dyn OutputSet + 'a) {
        &mut *self.outset
    }

    /// Output set, for snapshot reads.
    pub fn snapshot(&self) -> &(dyn OutputSet + 'a) {
        &*self.outset
    }

    #[inline]
    pub fn options(&self) -> EvalOptions {
        self.options
    }

    /// Report a soft diagnostic. Evaluation always continues.
    pub fn warn(&mut self, message: &str, cause: WarningCause) {
        tracing::debug!(%cause, warning = message, "analysis warning");
        self.warnings.set_warning(message, cause);
    }
}
