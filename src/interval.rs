use crate::error::ViolationKind;
use num_traits::PrimInt;
use std::fmt::Debug;
use std::ops::Range;

/// A half-open interval `[lo, hi)` of integers.
///
/// A valid interval is never empty: `lo < hi`. [Interval::new] and
/// [Interval::try_new] enforce this, [Interval::new_unchecked] does not.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.lo, self.hi)
    }
}

impl<T> Interval<T> {
    /// Creates an interval without checking `lo < hi`.
    ///
    /// The unchecked operations in [crate::ops] give unspecified results for
    /// intervals built this way with `lo >= hi`. Use [crate::checked] to reject them.
    pub const fn new_unchecked(lo: T, hi: T) -> Self {
        Interval { lo, hi }
    }

    /// Inclusive lower bound.
    pub fn lo(&self) -> T
    where
        T: Copy,
    {
        self.lo
    }

    /// Exclusive upper bound.
    pub fn hi(&self) -> T
    where
        T: Copy,
    {
        self.hi
    }

    pub fn into_range(self) -> Range<T> {
        self.lo..self.hi
    }
}

impl<T: Ord> Interval<T> {
    /// Creates the interval `[lo, hi)`.
    ///
    /// # Panics
    ///
    /// Panics if `lo >= hi`.
    pub fn new(lo: T, hi: T) -> Self {
        assert!(lo < hi, "Interval::new: lo must be strictly less than hi");
        Interval { lo, hi }
    }

    /// Creates the interval `[lo, hi)`, or fails with [ViolationKind::Inverted]
    /// if it would be empty or inverted.
    pub fn try_new(lo: T, hi: T) -> Result<Self, ViolationKind> {
        if lo < hi {
            Ok(Interval { lo, hi })
        } else {
            Err(ViolationKind::Inverted)
        }
    }

    /// `true` unless the interval was built unchecked with `lo >= hi`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lo < self.hi
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        &self.lo <= value && value < &self.hi
    }
}

impl<T: PrimInt> Interval<T> {
    /// Number of integers covered, `hi - lo`.
    ///
    /// Overflows like ordinary integer subtraction when the span does not fit in `T`.
    #[inline]
    pub fn len(&self) -> T {
        self.hi - self.lo
    }
}

impl<T: Ord> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self::new(value.start, value.end)
    }
}

impl<T: Ord> From<(T, T)> for Interval<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T> From<Interval<T>> for Range<T> {
    fn from(value: Interval<T>) -> Self {
        value.into_range()
    }
}

impl<T> From<Interval<T>> for (T, T) {
    fn from(value: Interval<T>) -> Self {
        (value.lo, value.hi)
    }
}
