//! Evaluation policy switches.
//!
//! `EvalOptions` is a plain `Copy` value carried by every [`crate::EvalContext`].
//! Each field toggles one precision or reporting policy; the defaults match the
//! behaviour of the host language as closely as the lattice allows.

/// Policy switches for the evaluators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    canonical_integer_keys: bool,
    warn_float_identity: bool,
    materialize_array_union: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            canonical_integer_keys: true,
            warn_float_identity: true,
            materialize_array_union: true,
        }
    }
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat canonical decimal strings (`"5"`, `"-3"`) as integer array keys.
    #[must_use]
    pub fn with_canonical_integer_keys(mut self, enabled: bool) -> Self {
        self.canonical_integer_keys = enabled;
        self
    }

    /// Warn when two floats are compared with `===` or `!==`.
    #[must_use]
    pub fn with_warn_float_identity(mut self, enabled: bool) -> Self {
        self.warn_float_identity = enabled;
        self
    }

    /// Build the union array for `array + array` instead of "any array".
    #[must_use]
    pub fn with_materialize_array_union(mut self, enabled: bool) -> Self {
        self.materialize_array_union = enabled;
        self
    }

    /// Whether `"5"` used as an array key addresses the same slot as `5`.
    #[inline]
    pub fn canonical_integer_keys(&self) -> bool {
        self.canonical_integer_keys
    }

    #[inline]
    pub fn warn_float_identity(&self) -> bool {
        self.warn_float_identity
    }

    /// Whether `array + array` on two concrete arrays allocates the union.
    ///
    /// When off, the result is "any array" and the snapshot is not touched.
    #[inline]
    pub fn materialize_array_union(&self) -> bool {
        self.materialize_array_union
    }
}
