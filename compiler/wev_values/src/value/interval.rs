//! Closed numeric intervals.

use std::fmt;

/// A numeric representation that can bound an [`Interval`].
pub trait IntervalBound: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// The zero of the representation.
    const ZERO: Self;
    /// Smallest representable bound.
    const LOWEST: Self;
    /// Largest representable bound.
    const HIGHEST: Self;
}

impl IntervalBound for i32 {
    const ZERO: Self = 0;
    const LOWEST: Self = i32::MIN;
    const HIGHEST: Self = i32::MAX;
}

impl IntervalBound for i64 {
    const ZERO: Self = 0;
    const LOWEST: Self = i64::MIN;
    const HIGHEST: Self = i64::MAX;
}

impl IntervalBound for f64 {
    const ZERO: Self = 0.0;
    const LOWEST: Self = f64::NEG_INFINITY;
    const HIGHEST: Self = f64::INFINITY;
}

/// The closed range `[start, end]` with `start <= end`.
///
/// The ordering invariant is enforced at construction; `NaN` bounds are
/// rejected because they are unordered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: IntervalBound> Interval<T> {
    /// Create `[start, end]`, or `None` if `start > end` or a bound is unordered.
    pub fn new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Create the interval spanning both bounds in whichever order they come.
    pub fn spanning(a: T, b: T) -> Option<Self> {
        Self::new(a, b).or_else(|| Self::new(b, a))
    }

    /// The single-point interval `[value, value]`.
    ///
    /// Returns `None` only for an unordered float.
    pub fn point(value: T) -> Option<Self> {
        Self::new(value, value)
    }

    /// Every value of the representation.
    pub fn entire() -> Self {
        Self {
            start: T::LOWEST,
            end: T::HIGHEST,
        }
    }

    #[inline]
    pub fn start(self) -> T {
        self.start
    }

    #[inline]
    pub fn end(self) -> T {
        self.end
    }

    /// Whether the interval holds exactly one value.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    pub fn contains_zero(self) -> bool {
        self.contains(T::ZERO)
    }

    /// Whether the interval is exactly `{0}`.
    pub fn is_zero(self) -> bool {
        self.start == T::ZERO && self.end == T::ZERO
    }

    /// Whether the two intervals share no value.
    pub fn is_disjoint(self, other: Self) -> bool {
        self.end < other.start || other.end < self.start
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
