//! Numeric operand representation.
//!
//! Operands carry their numeric kind at runtime so that operations can
//! enforce which kind they accept.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a [`Number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Integer,
    Float,
}

impl NumberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole or floating-point number.
///
/// Serializes untagged, so JSON `10` reads as an integer and `2.5` as a
/// float.
///
/// # Example
///
/// ```rust
/// use reckoner::core::{Number, NumberKind};
///
/// let n = Number::from(10);
/// assert_eq!(n.kind(), NumberKind::Integer);
/// assert_eq!(Number::from(6.0).to_string(), "6.0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Self::Int(_) => NumberKind::Integer,
            Self::Float(_) => NumberKind::Float,
        }
    }

    /// Widen to `f64` for comparisons and rounding.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            // Keep a trailing ".0" so floats stay distinguishable from integers
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Round `value` to `decimals` places, half away from zero.
///
/// Values whose scaled form is not finite are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Number::Int(3).kind(), NumberKind::Integer);
        assert_eq!(Number::Float(3.0).kind(), NumberKind::Float);
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Number::Int(15).to_string(), "15");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Float(2.25).to_string(), "2.25");
    }

    #[test]
    fn untagged_json_distinguishes_kinds() {
        let int: Number = serde_json::from_str("10").unwrap();
        let float: Number = serde_json::from_str("2.5").unwrap();

        assert_eq!(int, Number::Int(10));
        assert_eq!(float, Number::Float(2.5));
        assert_eq!(serde_json::to_string(&Number::Int(7)).unwrap(), "7");
    }

    #[test]
    fn accessors_are_kind_strict() {
        assert_eq!(Number::Int(4).as_integer(), Some(4));
        assert_eq!(Number::Int(4).as_float(), None);
        assert_eq!(Number::Float(4.5).as_float(), Some(4.5));
        assert_eq!(Number::Float(4.5).as_integer(), None);
        assert_eq!(Number::Int(4).as_f64(), 4.0);
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
    }

    #[test]
    fn round_to_leaves_unscalable_values() {
        assert_eq!(round_to(f64::MAX, 5), f64::MAX);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
