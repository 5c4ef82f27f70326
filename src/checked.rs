//! Validating versions of the operations in [crate::ops].
//!
//! Each function checks its preconditions before running the sweep and returns a
//! [PreconditionViolation] naming the argument, the position and the broken
//! invariant. Input is never silently repaired.
//!
//! ```
//! # use interval_sets::{checked, Interval, Operand, ViolationKind};
//! let a = [Interval::new(1, 3), Interval::new(3, 5)];
//! let err = checked::union(&a, &[]).unwrap_err();
//! assert_eq!(err.operand, Operand::Left);
//! assert_eq!(err.index, 1);
//! assert_eq!(err.kind, ViolationKind::Adjacent);
//! ```
use crate::error::{Operand, PreconditionViolation, ViolationKind};
use crate::interval::Interval;
use crate::ops::{self, IntervalVec};
use log::debug;
use num_traits::PrimInt;
use std::cmp::Ordering;

/// Checks that every interval has `lo < hi`. Order is not checked.
pub fn validate_intervals<T: Ord>(xs: &[Interval<T>]) -> Result<(), PreconditionViolation> {
    match xs.iter().position(|x| !x.is_valid()) {
        Some(index) => Err(PreconditionViolation::new(
            Operand::Input,
            index,
            ViolationKind::Inverted,
        )),
        None => Ok(()),
    }
}

/// Checks that `xs` is normalized: valid intervals, strictly increasing,
/// non-overlapping and non-adjacent.
pub fn validate_normalized<T: Ord + Copy>(xs: &[Interval<T>]) -> Result<(), PreconditionViolation> {
    validate_intervals(xs)?;
    for (index, w) in xs.windows(2).enumerate() {
        let (prev, next) = (&w[0], &w[1]);
        let kind = if next.lo() < prev.lo() {
            ViolationKind::Unsorted
        } else {
            match next.lo().cmp(&prev.hi()) {
                Ordering::Less => ViolationKind::Overlapping,
                Ordering::Equal => ViolationKind::Adjacent,
                Ordering::Greater => continue,
            }
        };
        return Err(PreconditionViolation::new(Operand::Input, index + 1, kind));
    }
    Ok(())
}

fn check_raw<T: Ord>(op: &str, xs: &[Interval<T>]) -> Result<(), PreconditionViolation> {
    validate_intervals(xs).map_err(|e| rejected(op, e))
}

fn check_normalized<T: Ord + Copy>(
    op: &str,
    operand: Operand,
    xs: &[Interval<T>],
) -> Result<(), PreconditionViolation> {
    validate_normalized(xs).map_err(|e| rejected(op, e.with_operand(operand)))
}

fn rejected(op: &str, e: PreconditionViolation) -> PreconditionViolation {
    debug!(
        "{} rejected {} at index {}: {}",
        op, e.operand, e.index, e.kind
    );
    e
}

/// [ops::coalesce], rejecting intervals with `lo >= hi` instead of dropping them.
pub fn coalesce<T, I>(raw: I) -> Result<IntervalVec<T>, PreconditionViolation>
where
    T: Ord + Copy,
    I: IntoIterator<Item = Interval<T>>,
{
    let raw: IntervalVec<T> = raw.into_iter().collect();
    check_raw("coalesce", &raw)?;
    Ok(ops::coalesce(raw))
}

pub fn union<T: Ord + Copy>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Result<IntervalVec<T>, PreconditionViolation> {
    check_normalized("union", Operand::Left, a)?;
    check_normalized("union", Operand::Right, b)?;
    Ok(ops::union(a, b))
}

pub fn intersect<T: Ord + Copy>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Result<IntervalVec<T>, PreconditionViolation> {
    check_normalized("intersect", Operand::Left, a)?;
    check_normalized("intersect", Operand::Right, b)?;
    Ok(ops::intersect(a, b))
}

pub fn difference<T: Ord + Copy>(
    a: &[Interval<T>],
    b: &[Interval<T>],
) -> Result<IntervalVec<T>, PreconditionViolation> {
    check_normalized("difference", Operand::Left, a)?;
    check_normalized("difference", Operand::Right, b)?;
    Ok(ops::difference(a, b))
}

/// [ops::volume] on validated input.
///
/// Fails with [ViolationKind::Overflow] at the first interval whose length, or
/// the running total including it, does not fit in `T`.
pub fn volume<T: PrimInt>(xs: &[Interval<T>]) -> Result<T, PreconditionViolation> {
    check_normalized("volume", Operand::Input, xs)?;
    let mut total = T::zero();
    for (index, x) in xs.iter().enumerate() {
        total = match x.hi().checked_sub(&x.lo()).and_then(|len| total.checked_add(&len)) {
            Some(total) => total,
            None => {
                let e = PreconditionViolation::new(Operand::Input, index, ViolationKind::Overflow);
                return Err(rejected("volume", e));
            }
        };
    }
    Ok(total)
}
