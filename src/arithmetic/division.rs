//! Division results.

use crate::core::round_to;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Divisors with an absolute value below this are rejected.
pub const DIVISOR_THRESHOLD: f64 = 1e-10;

/// Decimal places kept in [`DivisionInfo::rounded_result`].
pub const ROUNDED_DECIMALS: u32 = 2;

/// Coarse precision label for a division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// `|divisor| > 1`
    High,
    Low,
}

impl Precision {
    pub fn for_divisor(divisor: f64) -> Self {
        if divisor.abs() > 1.0 {
            Self::High
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor attached to every successful division.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivisionInfo {
    pub precision: Precision,
    /// Quotient rounded to two decimal places
    pub rounded_result: f64,
}

/// Quotient, remainder and descriptor of `a / b`.
///
/// The remainder takes the sign of the dividend.
///
/// # Example
///
/// ```rust
/// use reckoner::arithmetic::{ArithmeticUnit, Precision};
/// use reckoner::core::Number;
///
/// let division = ArithmeticUnit::new()
///     .divide(Number::Float(6.0), Number::Float(2.0))
///     .unwrap();
///
/// assert_eq!(division.quotient, 3.0);
/// assert_eq!(division.remainder, 0.0);
/// assert_eq!(division.info.precision, Precision::High);
/// assert_eq!(division.info.rounded_result, 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub quotient: f64,
    pub remainder: f64,
    pub info: DivisionInfo,
}

impl Division {
    pub(crate) fn compute(a: f64, b: f64) -> Self {
        let quotient = a / b;
        Self {
            quotient,
            remainder: a % b,
            info: DivisionInfo {
                precision: Precision::for_divisor(b),
                rounded_result: round_to(quotient, ROUNDED_DECIMALS),
            },
        }
    }

    /// Split into the `(quotient, remainder, info)` triple.
    pub fn into_parts(self) -> (f64, f64, DivisionInfo) {
        (self.quotient, self.remainder, self.info)
    }
}
