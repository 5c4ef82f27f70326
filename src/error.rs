use std::fmt;
use thiserror::Error;

/// Which invariant of an interval sequence was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ViolationKind {
    #[error("interval is empty or inverted (lo >= hi)")]
    Inverted,
    #[error("interval starts before its predecessor")]
    Unsorted,
    #[error("interval overlaps its predecessor")]
    Overlapping,
    #[error("interval touches its predecessor")]
    Adjacent,
    #[error("total length does not fit in the integer type")]
    Overflow,
}

/// The argument of an operation that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The only argument of a unary operation.
    Input,
    /// The `A` side of a binary operation.
    Left,
    /// The `B` side of a binary operation.
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operand::Input => "input",
            Operand::Left => "left operand",
            Operand::Right => "right operand",
        })
    }
}

/// Returned by the validating operations in [crate::checked] when an argument
/// is not in the form the operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{operand}: {kind} at index {index}")]
pub struct PreconditionViolation {
    pub operand: Operand,
    pub index: usize,
    pub kind: ViolationKind,
}

impl PreconditionViolation {
    pub fn new(operand: Operand, index: usize, kind: ViolationKind) -> Self {
        Self {
            operand,
            index,
            kind,
        }
    }

    pub(crate) fn with_operand(self, operand: Operand) -> Self {
        Self { operand, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = PreconditionViolation::new(Operand::Right, 3, ViolationKind::Overlapping);
        assert_eq!(
            e.to_string(),
            "right operand: interval overlaps its predecessor at index 3"
        );
        assert_eq!(
            e.with_operand(Operand::Input).to_string(),
            "input: interval overlaps its predecessor at index 3"
        );
    }

    #[test]
    fn kind_not_repeated_as_source() {
        use std::error::Error;
        let e = PreconditionViolation::new(Operand::Input, 0, ViolationKind::Inverted);
        assert!(e.source().is_none());
        assert_eq!(e.to_string().matches("lo >= hi").count(), 1);
    }
}
