//! The arithmetic unit.
//!
//! Four binary operations with strict operand kinds:
//! - `add`, `subtract` and `multiply` accept integers only
//! - `divide` accepts floats only, and rejects near-zero divisors
//!
//! The two families deliberately accept disjoint operand kinds. Nothing in
//! this module prints, records or holds state.

mod division;
mod validation;

pub use division::{Division, DivisionInfo, Precision, DIVISOR_THRESHOLD, ROUNDED_DECIMALS};

pub(crate) use validation::require_integer;

use crate::core::{round_to, CalcError, Number, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use validation::{require_floats, require_integers};

/// Result of applying an [`Operation`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outcome {
    /// Result of `add`, `subtract` or `multiply`
    Integer { value: i64 },
    /// Result of `divide`
    Division(Division),
}

impl Outcome {
    /// The primary numeric result: the integer, or the quotient.
    pub fn value(&self) -> Number {
        match self {
            Self::Integer { value } => Number::Int(*value),
            Self::Division(division) => Number::Float(division.quotient),
        }
    }

    pub fn as_division(&self) -> Option<&Division> {
        match self {
            Self::Division(division) => Some(division),
            Self::Integer { .. } => None,
        }
    }

    /// Round the primary value to `decimals` places.
    ///
    /// Integer results are already whole and come back unchanged. For a
    /// division only the quotient is rounded; the remainder and the
    /// descriptor keep their computed values.
    pub fn rounded(self, decimals: u32) -> Self {
        match self {
            Self::Integer { .. } => self,
            Self::Division(division) => Self::Division(Division {
                quotient: round_to(division.quotient, decimals),
                ..division
            }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Stateless executor for the four operations.
///
/// # Example
///
/// ```rust
/// use reckoner::arithmetic::ArithmeticUnit;
/// use reckoner::core::{ErrorKind, Number};
///
/// let unit = ArithmeticUnit::new();
///
/// assert_eq!(unit.add(Number::Int(2), Number::Int(3)).unwrap(), 5);
///
/// let err = unit.add(Number::Float(2.5), Number::Int(3)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
///
/// let err = unit.divide(Number::Int(6), Number::Int(2)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticUnit;

impl ArithmeticUnit {
    pub fn new() -> Self {
        Self
    }

    /// Add two integers.
    pub fn add(&self, a: Number, b: Number) -> Result<i64, CalcError> {
        let (a, b) = require_integers(a, b)?;
        debug!(a, b, "performing addition");
        a.checked_add(b).ok_or(CalcError::Overflow {
            operation: Operation::Add,
        })
    }

    /// Subtract `b` from `a`, both integers.
    pub fn subtract(&self, a: Number, b: Number) -> Result<i64, CalcError> {
        let (a, b) = require_integers(a, b)?;
        debug!(a, b, "performing subtraction");
        a.checked_sub(b).ok_or(CalcError::Overflow {
            operation: Operation::Subtract,
        })
    }

    /// Multiply two integers.
    pub fn multiply(&self, a: Number, b: Number) -> Result<i64, CalcError> {
        let (a, b) = require_integers(a, b)?;
        debug!(a, b, "performing multiplication");
        a.checked_mul(b).ok_or(CalcError::Overflow {
            operation: Operation::Multiply,
        })
    }

    /// Divide two floats.
    ///
    /// Fails with a type error for integer operands and with a range error
    /// when `|b|` is below [`DIVISOR_THRESHOLD`], so tiny non-zero divisors
    /// are rejected as well as zero.
    pub fn divide(&self, a: Number, b: Number) -> Result<Division, CalcError> {
        let (a, b) = require_floats(a, b)?;
        if b.abs() < DIVISOR_THRESHOLD {
            return Err(CalcError::DivisorTooSmall {
                divisor: b,
                threshold: DIVISOR_THRESHOLD,
            });
        }
        debug!(a, b, "performing division");
        Ok(Division::compute(a, b))
    }

    /// Dispatch `operation` to the matching method.
    pub fn apply(&self, operation: Operation, a: Number, b: Number) -> Result<Outcome, CalcError> {
        match operation {
            Operation::Add => self.add(a, b).map(|value| Outcome::Integer { value }),
            Operation::Subtract => self.subtract(a, b).map(|value| Outcome::Integer { value }),
            Operation::Multiply => self.multiply(a, b).map(|value| Outcome::Integer { value }),
            Operation::Divide => self.divide(a, b).map(Outcome::Division),
        }
    }
}
