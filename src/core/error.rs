//! Calculation errors.

use super::number::NumberKind;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coarse classification of a [`CalcError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// An operand does not have the numeric kind the operation requires
    Type,
    /// Operands are well-typed but outside the range the operation accepts
    Range,
    /// The requested operation name is not recognized
    InvalidOperation,
}

/// A single operand that failed its kind constraint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperandMismatch {
    /// Operand label, e.g. `"a"`, `"b"` or `"number"`
    pub operand: &'static str,
    pub found: NumberKind,
}

impl fmt::Display for OperandMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.operand, self.found)
    }
}

/// Errors returned by arithmetic, dispatch and analysis.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Operands must be {expected}s ({})", describe(.mismatches))]
    Type {
        expected: NumberKind,
        mismatches: Vec<OperandMismatch>,
    },

    #[error("Divisor too close to zero: |{divisor}| < {threshold}")]
    DivisorTooSmall { divisor: f64, threshold: f64 },

    #[error("Integer overflow in {operation}")]
    Overflow { operation: Operation },

    #[error("Invalid operation '{name}'")]
    InvalidOperation { name: String },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::DivisorTooSmall { .. } | Self::Overflow { .. } => ErrorKind::Range,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
        }
    }
}

fn describe(mismatches: &[OperandMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
