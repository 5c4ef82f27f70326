//! The unchecked sweep operations.
//!
//! `union`, `intersect`, `difference` and `volume` require *normalized* input:
//! intervals strictly increasing, non-overlapping and non-adjacent. They do not
//! check this. Given anything else the result is deterministic but unspecified.
//! Use [crate::checked] for validating versions of the same functions.
//!
//! Every function allocates a fresh [IntervalVec] and never retains its input.
//!
//! ```
//! # use interval_sets::{coalesce, difference, Interval};
//! let a = coalesce(vec![Interval::new(9, 12), Interval::new(4, 8)]);
//! let b = coalesce(vec![Interval::new(3, 5), Interval::new(7, 10)]);
//! let d = difference(&a, &b);
//! assert_eq!(d.as_slice(), &[Interval::new(5, 7), Interval::new(10, 12)]);
//! ```
use crate::interval::Interval;
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::cmp::{max, min};

/// The sequence type produced by all operations.
pub type IntervalVec<T> = SmallVec<[Interval<T>; 2]>;

/// Sorts and merges an arbitrary sequence of intervals into normalized form.
///
/// Overlapping and touching intervals are merged, so the result never contains
/// two intervals where one ends exactly where the next starts. Intervals with
/// `lo >= hi` cover nothing and are dropped.
pub fn coalesce<T, I>(raw: I) -> IntervalVec<T>
where
    T: Ord + Copy,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut xs: IntervalVec<T> = raw.into_iter().filter(Interval::is_valid).collect();
    xs.sort_unstable_by_key(|x| x.lo());
    let mut res = IntervalVec::new();
    let mut iter = xs.into_iter();
    let first = match iter.next() {
        Some(x) => x,
        None => return res,
    };
    let (mut start, mut end) = (first.lo(), first.hi());
    for x in iter {
        if x.lo() <= end {
            end = max(end, x.hi());
        } else {
            res.push(Interval::new_unchecked(start, end));
            start = x.lo();
            end = x.hi();
        }
    }
    res.push(Interval::new_unchecked(start, end));
    res
}

/// Union of two normalized sequences.
///
/// Each output run is seeded with the lowest remaining interval from either
/// side and then absorbs every interval from *both* sides that overlaps or
/// touches it, so interleaved chains like `[1,3) [2,5) [4,7)` collapse fully.
pub fn union<T: Ord + Copy>(a: &[Interval<T>], b: &[Interval<T>]) -> IntervalVec<T> {
    let (mut i, mut j) = (0, 0);
    let mut res = IntervalVec::new();
    loop {
        let seed = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) if x.lo() < y.lo() => {
                i += 1;
                x
            }
            (_, Some(y)) => {
                j += 1;
                y
            }
            (Some(x), None) => {
                i += 1;
                x
            }
            (None, None) => break,
        };
        let start = seed.lo();
        let mut end = seed.hi();
        loop {
            if let Some(x) = a.get(i).filter(|x| x.lo() <= end) {
                end = max(end, x.hi());
                i += 1;
            } else if let Some(y) = b.get(j).filter(|y| y.lo() <= end) {
                end = max(end, y.hi());
                j += 1;
            } else {
                break;
            }
        }
        res.push(Interval::new_unchecked(start, end));
    }
    res
}

/// Intersection of two normalized sequences.
///
/// Intervals that only share an endpoint do not intersect.
pub fn intersect<T: Ord + Copy>(a: &[Interval<T>], b: &[Interval<T>]) -> IntervalVec<T> {
    let (mut i, mut j) = (0, 0);
    let mut res = IntervalVec::new();
    while i < a.len() && j < b.len() {
        let (x, y) = (&a[i], &b[j]);
        let lo = max(x.lo(), y.lo());
        let hi = min(x.hi(), y.hi());
        if hi > lo {
            res.push(Interval::new_unchecked(lo, hi));
        }
        // whichever ends first can not intersect anything further on the other side
        if x.hi() < y.hi() {
            i += 1;
        } else {
            j += 1;
        }
    }
    res
}

/// Everything in `a` that is not in `b`, both normalized.
///
/// Each interval of `a` is split around every interval of `b` that overlaps it.
pub fn difference<T: Ord + Copy>(a: &[Interval<T>], b: &[Interval<T>]) -> IntervalVec<T> {
    let mut j = 0;
    let mut res = IntervalVec::new();
    for x in a {
        while j < b.len() && b[j].hi() < x.lo() {
            j += 1;
        }
        match b.get(j) {
            None => res.push(*x),
            Some(y) if y.lo() > x.lo() => {
                res.push(Interval::new_unchecked(x.lo(), min(y.lo(), x.hi())));
            }
            Some(_) => {}
        }
        // start of a gap between two holes, pending until we know where it ends
        let mut start = None;
        while let Some(y) = b.get(j).filter(|y| y.lo() < x.hi()) {
            if let Some(s) = start.take() {
                res.push(Interval::new_unchecked(s, min(y.lo(), x.hi())));
            }
            if y.hi() < x.hi() {
                start = Some(y.hi());
                j += 1;
            } else {
                // y reaches to or past the end of x and may still cut into the next one
                break;
            }
        }
        if let Some(s) = start {
            res.push(Interval::new_unchecked(s, x.hi()));
        }
    }
    res
}

/// Total number of integers covered by a normalized sequence.
///
/// Overlapping input is counted more than once. Overflow behaves like ordinary
/// integer arithmetic; see [checked_volume] for a non-panicking version.
pub fn volume<T: PrimInt>(xs: &[Interval<T>]) -> T {
    xs.iter().fold(T::zero(), |acc, x| acc + x.len())
}

/// Like [volume], but returns `None` if the sum or any `hi - lo` overflows `T`.
pub fn checked_volume<T: PrimInt>(xs: &[Interval<T>]) -> Option<T> {
    xs.iter().try_fold(T::zero(), |acc, x| {
        x.hi().checked_sub(&x.lo()).and_then(|len| acc.checked_add(&len))
    })
}
