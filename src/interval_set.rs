//! # About
//!
//! An owned, always normalized set of half-open integer intervals
//!
//! ```
//! # use interval_sets::IntervalSet;
//! let mut a: IntervalSet<i32> = IntervalSet::from(10..20);
//! let b: IntervalSet<i32> = IntervalSet::from(1..5);
//!
//! a |= b;
//! let r = &a - &IntervalSet::from(3..12);
//! assert_eq!(format!("{:?}", r), "IntervalSet{1..3, 12..20}");
//! assert_eq!(r.volume(), 10);
//! ```
//!
//! [IntervalSet] holds its intervals in a `SmallVec` and can only be built through
//! constructors that normalize or validate, so every operation on it can use the
//! unchecked sweeps from [crate::ops]. [IntervalSetRef] is the borrowed form: a
//! slice that has been checked once and can then be combined without copying.
//!
//! # Complexity
//!
//! |operation    | comparisons        | remark
//! |-------------|--------------------|--------
//! |from_raw     | O(N log(N))        | sort, then linear sweep
//! |union        | O(N + M)           | two pointer merge
//! |intersection | O(N + M)           | two pointer merge
//! |difference   | O(N + M)           | two pointer merge
//! |volume       | O(N)               |
//! |contains     | O(log(N))          | binary search
//! |is_disjoint  | O(N + M)           | merge with early out
//! |is_subset    | O(N + M)           | merge with early out
//!
//! The binary operations always allocate a new result. The assigning operators
//! replace the left hand side with that result.
use crate::checked;
use crate::error::PreconditionViolation;
use crate::interval::Interval;
use crate::ops::{self, IntervalVec};
use num_traits::PrimInt;
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Deref, Range, Sub, SubAssign};

/// A normalized set of intervals: sorted, non-overlapping, non-adjacent.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct IntervalSet<T>(IntervalVec<T>);

/// A borrowed normalized set of intervals.
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct IntervalSetRef<T>([Interval<T>]);

impl<T: Debug> Debug for IntervalSetRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntervalSet{{")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", x)?;
        }
        write!(f, "}}")
    }
}

impl<T: Debug> Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> IntervalSetRef<T> {
    /// note that this is private since it does not check the invariants!
    #[ref_cast_custom]
    fn new_unchecked_impl(intervals: &[Interval<T>]) -> &Self;

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.0.iter()
    }

    /// Number of intervals, not the number of integers (see [IntervalSetRef::volume]).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Ord + Copy> IntervalSetRef<T> {
    /// Views `intervals` as a set after checking that it is normalized.
    pub fn new(intervals: &[Interval<T>]) -> Result<&Self, PreconditionViolation> {
        checked::validate_normalized(intervals)?;
        Ok(Self::new_unchecked_impl(intervals))
    }

    pub fn contains(&self, value: &T) -> bool {
        // index of the first interval starting after value
        let index = self.0.partition_point(|x| &x.lo() <= value);
        index > 0 && value < &self.0[index - 1].hi()
    }

    pub fn union(&self, that: &Self) -> IntervalSet<T> {
        IntervalSet(ops::union(&self.0, &that.0))
    }

    pub fn intersection(&self, that: &Self) -> IntervalSet<T> {
        IntervalSet(ops::intersect(&self.0, &that.0))
    }

    pub fn difference(&self, that: &Self) -> IntervalSet<T> {
        IntervalSet(ops::difference(&self.0, &that.0))
    }

    /// `true` if no integer is in both sets.
    pub fn is_disjoint(&self, that: &Self) -> bool {
        let (a, b) = (&self.0, &that.0);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            if a[i].hi() <= b[j].lo() {
                i += 1;
            } else if b[j].hi() <= a[i].lo() {
                j += 1;
            } else {
                return false;
            }
        }
        true
    }

    /// `true` if every integer in `self` is also in `that`.
    pub fn is_subset(&self, that: &Self) -> bool {
        let b = &that.0;
        let mut j = 0;
        for x in self.0.iter() {
            while j < b.len() && b[j].hi() <= x.lo() {
                j += 1;
            }
            // normalized sets never split a covered range, so one interval must hold all of x
            match b.get(j) {
                Some(y) if y.lo() <= x.lo() && x.hi() <= y.hi() => {}
                _ => return false,
            }
        }
        true
    }

    pub fn is_superset(&self, that: &Self) -> bool {
        that.is_subset(self)
    }
}

impl<T: Copy> ToOwned for IntervalSetRef<T> {
    type Owned = IntervalSet<T>;
    fn to_owned(&self) -> IntervalSet<T> {
        IntervalSet(self.0.iter().copied().collect())
    }
}

impl<T: PrimInt> IntervalSetRef<T> {
    /// Number of integers in the set.
    pub fn volume(&self) -> T {
        ops::volume(&self.0)
    }

    pub fn checked_volume(&self) -> Option<T> {
        ops::checked_volume(&self.0)
    }
}

impl<'a, T> IntoIterator for &'a IntervalSetRef<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntervalSet<T> {
    pub fn empty() -> Self {
        IntervalSet(IntervalVec::new())
    }

    pub fn into_inner(self) -> IntervalVec<T> {
        self.0
    }
}

impl<T: Ord + Copy> IntervalSet<T> {
    /// Normalizes an arbitrary sequence of intervals.
    pub fn from_raw<I: IntoIterator<Item = Interval<T>>>(raw: I) -> Self {
        IntervalSet(ops::coalesce(raw))
    }

    /// Takes a sequence that must already be normalized, and fails otherwise.
    pub fn try_from_normalized<I: IntoIterator<Item = Interval<T>>>(
        intervals: I,
    ) -> Result<Self, PreconditionViolation> {
        let intervals: IntervalVec<T> = intervals.into_iter().collect();
        checked::validate_normalized(&intervals)?;
        Ok(IntervalSet(intervals))
    }

    /// Takes a sequence that the caller guarantees to be normalized.
    ///
    /// Only checked with `debug_assert!`. Operations on a set built from
    /// non-normalized data give unspecified results.
    #[cfg(feature = "new_unchecked")]
    pub fn new_unchecked(intervals: IntervalVec<T>) -> Self {
        debug_assert!(checked::validate_normalized(&intervals).is_ok());
        IntervalSet(intervals)
    }
}

impl<T> Deref for IntervalSet<T> {
    type Target = IntervalSetRef<T>;
    fn deref(&self) -> &Self::Target {
        IntervalSetRef::new_unchecked_impl(self.0.as_slice())
    }
}

impl<T> Borrow<IntervalSetRef<T>> for IntervalSet<T> {
    fn borrow(&self) -> &IntervalSetRef<T> {
        self
    }
}

impl<T> AsRef<[Interval<T>]> for IntervalSet<T> {
    fn as_ref(&self) -> &[Interval<T>] {
        self.0.as_slice()
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = smallvec::IntoIter<[Interval<T>; 2]>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Ord + Copy> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_raw(iter)
    }
}

impl<T> From<Interval<T>> for IntervalSet<T> {
    fn from(value: Interval<T>) -> Self {
        let mut t = IntervalVec::new();
        t.push(value);
        IntervalSet(t)
    }
}

impl<T: Ord + Copy> From<Range<T>> for IntervalSet<T> {
    /// An empty or inverted range gives the empty set.
    fn from(value: Range<T>) -> Self {
        match Interval::try_new(value.start, value.end) {
            Ok(x) => Self::from(x),
            Err(_) => Self::empty(),
        }
    }
}

impl<T: Ord + Copy> BitOr for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn bitor(self, that: Self) -> Self::Output {
        self.union(that)
    }
}

impl<T: Ord + Copy> BitOrAssign for IntervalSet<T> {
    fn bitor_assign(&mut self, that: Self) {
        *self = self.union(&that);
    }
}

impl<T: Ord + Copy> BitAnd for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn bitand(self, that: Self) -> Self::Output {
        self.intersection(that)
    }
}

impl<T: Ord + Copy> BitAndAssign for IntervalSet<T> {
    fn bitand_assign(&mut self, that: Self) {
        *self = self.intersection(&that);
    }
}

impl<T: Ord + Copy> Sub for &IntervalSet<T> {
    type Output = IntervalSet<T>;
    fn sub(self, that: Self) -> Self::Output {
        self.difference(that)
    }
}

impl<T: Ord + Copy> SubAssign for IntervalSet<T> {
    fn sub_assign(&mut self, that: Self) {
        *self = self.difference(&that);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operand;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    type Test = IntervalSet<i64>;

    impl Arbitrary for IntervalSet<i64> {
        fn arbitrary<G: Gen>(g: &mut G) -> Self {
            let raw: Vec<(i64, i64)> = Arbitrary::arbitrary(g);
            raw.into_iter()
                .map(|(a, b)| Interval::new_unchecked(a.min(b), a.max(b)))
                .collect()
        }
    }

    /// every point where membership in a or b can change, plus its neighbours
    fn samples(a: &Test, b: &Test) -> BTreeSet<i64> {
        let mut res = BTreeSet::new();
        res.insert(i64::min_value());
        for x in a.iter().chain(b.iter()) {
            for &e in &[x.lo(), x.hi()] {
                res.insert(e - 1);
                res.insert(e);
                res.insert(e + 1);
            }
        }
        res.insert(i64::max_value());
        res
    }

    fn binary_element_test(a: &Test, b: &Test, r: &Test, op: impl Fn(bool, bool) -> bool) -> bool {
        samples(a, b)
            .into_iter()
            .all(|e| r.contains(&e) == op(a.contains(&e), b.contains(&e)))
    }

    fn is_normalized(a: &Test) -> bool {
        checked::validate_normalized(a.as_slice()).is_ok()
    }

    #[test]
    fn smoke_test() {
        let x: Test = Test::from(0..10);
        assert!(x.contains(&0));
        assert!(x.contains(&9));
        assert!(!x.contains(&10));
        assert!(!x.contains(&-1));

        let z: Test = Test::from(20..30);
        let r = &x | &z;
        assert_eq!(format!("{:?}", r), "IntervalSet{0..10, 20..30}");
        assert!(!r.contains(&15));
        assert!(r.contains(&25));
        assert_eq!(r.volume(), 20);
        assert_eq!(r.len(), 2);

        assert!(x.is_disjoint(&z));
        assert!(x.is_subset(&r));
        assert!(r.is_superset(&z));
        assert!(!r.is_subset(&x));
        let clipped = &r & &Test::from(5..25);
        assert_eq!(
            clipped,
            Test::from_raw(vec![Interval::new(5, 10), Interval::new(20, 25)])
        );
        assert_eq!(&r - &r, Test::empty());
        assert_eq!(Test::from(5..5), Test::empty());
    }

    #[test]
    fn assign_ops() {
        let mut a = Test::from(0..10);
        a |= Test::from(10..12);
        assert_eq!(a, Test::from(0..12));
        a -= Test::from(3..4);
        assert_eq!(format!("{:?}", a), "IntervalSet{0..3, 4..12}");
        a &= Test::from(2..6);
        assert_eq!(format!("{:?}", a), "IntervalSet{2..3, 4..6}");
    }

    #[test]
    fn touching_is_disjoint() {
        let a = Test::from(0..5);
        let b = Test::from(5..9);
        assert!(a.is_disjoint(&b));
        assert!((&a & &b).is_empty());
        assert_eq!(&a | &b, Test::from(0..9));
    }

    #[test]
    fn borrowed_view() {
        let raw = [Interval::new(1, 3), Interval::new(5, 8)];
        let a = IntervalSetRef::new(&raw).unwrap();
        let b = Test::from(2..6);
        assert_eq!(a.volume(), 5);
        assert_eq!(format!("{:?}", a.union(&b)), "IntervalSet{1..8}");
        assert_eq!(format!("{:?}", a.difference(&b)), "IntervalSet{1..2, 6..8}");
        assert_eq!(a.to_owned().as_slice(), &raw[..]);

        let bad = [Interval::new(1, 3), Interval::new(3, 8)];
        let err = IntervalSetRef::new(&bad).unwrap_err();
        assert_eq!(err.operand, Operand::Input);
        assert_eq!(err.index, 1);
    }

    #[test]
    fn try_from_normalized() {
        assert!(Test::try_from_normalized(vec![Interval::new(1, 2), Interval::new(3, 4)]).is_ok());
        assert!(Test::try_from_normalized(vec![Interval::new(3, 4), Interval::new(1, 2)]).is_err());
    }

    #[quickcheck]
    fn from_raw_normalized(a: Test) -> bool {
        is_normalized(&a)
    }

    #[quickcheck]
    fn union_check(a: Test, b: Test) -> bool {
        let r = &a | &b;
        is_normalized(&r) && binary_element_test(&a, &b, &r, |a, b| a | b)
    }

    #[quickcheck]
    fn intersection_check(a: Test, b: Test) -> bool {
        let r = &a & &b;
        is_normalized(&r) && binary_element_test(&a, &b, &r, |a, b| a & b)
    }

    #[quickcheck]
    fn difference_check(a: Test, b: Test) -> bool {
        let r = &a - &b;
        is_normalized(&r) && binary_element_test(&a, &b, &r, |a, b| a & !b)
    }

    #[quickcheck]
    fn is_disjoint_check(a: Test, b: Test) -> bool {
        a.is_disjoint(&b) == (&a & &b).is_empty()
    }

    #[quickcheck]
    fn is_subset_check(a: Test, b: Test) -> bool {
        a.is_subset(&b) == (&a - &b).is_empty()
    }

    #[quickcheck]
    fn assign_consistent(a: Test, b: Test) -> bool {
        let mut u = a.clone();
        u |= b.clone();
        let mut i = a.clone();
        i &= b.clone();
        let mut d = a.clone();
        d -= b.clone();
        u == &a | &b && i == &a & &b && d == &a - &b
    }

    #[quickcheck]
    fn volume_additive(a: Test, b: Test) -> bool {
        (&a | &b).volume() + (&a & &b).volume() == a.volume() + b.volume()
    }
}
