//! Set algebra over sets of integers stored as sorted, non-overlapping,
//! non-adjacent half-open intervals `[lo, hi)`.
//!
//! Union, intersection, difference, normalization and volume never enumerate
//! individual integers, so the sets may span arbitrarily large ranges.
//!
//! There are three layers:
//!
//! - [ops]: the plain sweeps over slices. Fast, no validation.
//! - [checked]: the same operations, validating their preconditions first.
//! - [IntervalSet] / [IntervalSetRef]: types that are normalized by construction.
//!
//! ```
//! # use interval_sets::{coalesce, union, intersect, Interval};
//! let a = coalesce(vec![Interval::new(2, 4), Interval::new(1, 2), Interval::new(5, 6)]);
//! let b = coalesce(vec![Interval::new(6, 7)]);
//! assert_eq!(union(&a, &b).as_slice(), &[Interval::new(1, 4), Interval::new(5, 7)]);
//! assert!(intersect(&[Interval::new(1, 5)], &[Interval::new(5, 6)]).is_empty());
//! ```
mod error;
mod interval;

pub mod checked;
pub mod interval_set;
pub mod ops;

pub use error::{Operand, PreconditionViolation, ViolationKind};
pub use interval::Interval;
pub use interval_set::{IntervalSet, IntervalSetRef};
pub use ops::{checked_volume, coalesce, difference, intersect, union, volume, IntervalVec};
