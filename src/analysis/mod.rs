//! Number analysis.
//!
//! Classifies an integer by primality and parity and flags the answer to
//! everything. The result is a fresh nested structure per call.

use crate::arithmetic::require_integer;
use crate::core::{CalcError, Number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The number that sets [`SpecialFlags::is_answer_to_everything`].
pub const ANSWER_TO_EVERYTHING: i64 = 42;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeStatus {
    pub is_prime: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parity {
    pub even_status: bool,
    pub odd_status: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub prime_status: PrimeStatus,
    pub parity: Parity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub original_number: i64,
    pub number_as_string: String,
    pub analysis_timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFlags {
    pub is_answer_to_everything: bool,
}

/// Result of [`analyze_number`].
///
/// # Example
///
/// ```rust
/// use reckoner::analysis::analyze_number;
/// use reckoner::core::Number;
///
/// let analysis = analyze_number(Number::Int(7)).unwrap();
/// assert!(analysis.properties.prime_status.is_prime);
/// assert!(analysis.properties.parity.odd_status);
/// assert_eq!(analysis.meta.number_as_string, "7");
/// assert!(!analysis.special.is_answer_to_everything);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberAnalysis {
    pub properties: Properties,
    pub meta: AnalysisMeta,
    pub special: SpecialFlags,
}

impl NumberAnalysis {
    pub fn number(&self) -> i64 {
        self.meta.original_number
    }

    pub fn is_prime(&self) -> bool {
        self.properties.prime_status.is_prime
    }

    pub fn is_even(&self) -> bool {
        self.properties.parity.even_status
    }

    pub fn is_odd(&self) -> bool {
        self.properties.parity.odd_status
    }

    pub fn is_answer_to_everything(&self) -> bool {
        self.special.is_answer_to_everything
    }
}

/// Trial-division primality test.
///
/// Numbers below 2 are never prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n.unsigned_abs();
    (2u64..)
        .take_while(|d| d.saturating_mul(*d) <= n)
        .all(|d| n % d != 0)
}

/// Analyze an integer.
///
/// Fails with a type error when `number` is not an integer.
pub fn analyze_number(number: Number) -> Result<NumberAnalysis, CalcError> {
    let n = require_integer("number", number)?;
    let even = n.rem_euclid(2) == 0;

    Ok(NumberAnalysis {
        properties: Properties {
            prime_status: PrimeStatus {
                is_prime: is_prime(n),
            },
            parity: Parity {
                even_status: even,
                odd_status: !even,
            },
        },
        meta: AnalysisMeta {
            original_number: n,
            number_as_string: n.to_string(),
            analysis_timestamp: Utc::now(),
        },
        special: SpecialFlags {
            is_answer_to_everything: n == ANSWER_TO_EVERYTHING,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn analyze_prime() {
        let analysis = analyze_number(Number::Int(7)).unwrap();

        assert!(analysis.is_prime());
        assert!(!analysis.is_even());
        assert!(analysis.is_odd());
        assert!(!analysis.is_answer_to_everything());
        assert_eq!(analysis.number(), 7);
        assert_eq!(analysis.meta.number_as_string, "7");
    }

    #[test]
    fn analyze_answer_to_everything() {
        let analysis = analyze_number(Number::Int(42)).unwrap();

        assert!(!analysis.is_prime());
        assert!(analysis.is_even());
        assert!(!analysis.is_odd());
        assert!(analysis.is_answer_to_everything());
    }

    #[test]
    fn analyze_rejects_floats() {
        let err = analyze_number(Number::Float(3.14)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        // Whole-valued floats are still floats
        assert!(analyze_number(Number::Float(7.0)).is_err());
    }

    #[test]
    fn negative_numbers_have_parity_but_are_not_prime() {
        let analysis = analyze_number(Number::Int(-3)).unwrap();

        assert!(!analysis.is_prime());
        assert!(analysis.is_odd());
        assert_eq!(analysis.meta.number_as_string, "-3");
    }

    #[test]
    fn small_primes() {
        let primes: Vec<i64> = (-5..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn squares_of_primes_are_composite() {
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(7919 * 7919));
        assert!(is_prime(7919));
    }

    #[test]
    fn analysis_serializes_nested_groups() {
        let analysis = analyze_number(Number::Int(42)).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["properties"]["prime_status"]["is_prime"], false);
        assert_eq!(json["properties"]["parity"]["even_status"], true);
        assert_eq!(json["meta"]["original_number"], 42);
        assert_eq!(json["special"]["is_answer_to_everything"], true);
    }
}
