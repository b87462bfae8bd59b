//! Operand kind checks.
//!
//! Each operand is checked independently and violations are accumulated
//! with `Validation`, so a rejected call reports every offending operand
//! rather than only the first.

use crate::core::{CalcError, Number, NumberKind, OperandMismatch};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type OperandCheck<T> = Validation<T, NonEmptyVec<OperandMismatch>>;

fn expect_integer(operand: &'static str, value: Number) -> OperandCheck<i64> {
    match value {
        Number::Int(v) => Validation::success(v),
        other => Validation::fail(OperandMismatch {
            operand,
            found: other.kind(),
        }),
    }
}

fn expect_float(operand: &'static str, value: Number) -> OperandCheck<f64> {
    match value {
        Number::Float(v) => Validation::success(v),
        other => Validation::fail(OperandMismatch {
            operand,
            found: other.kind(),
        }),
    }
}

fn into_result<T>(
    expected: NumberKind,
    checks: Vec<OperandCheck<T>>,
) -> Result<Vec<T>, CalcError> {
    match Validation::all_vec(checks) {
        Validation::Success(values) => Ok(values),
        Validation::Failure(mismatches) => Err(CalcError::Type {
            expected,
            mismatches: mismatches.iter().cloned().collect(),
        }),
    }
}

/// Require both operands to be integers.
pub(crate) fn require_integers(a: Number, b: Number) -> Result<(i64, i64), CalcError> {
    let values = into_result(
        NumberKind::Integer,
        vec![expect_integer("a", a), expect_integer("b", b)],
    )?;
    Ok((values[0], values[1]))
}

/// Require both operands to be floats.
pub(crate) fn require_floats(a: Number, b: Number) -> Result<(f64, f64), CalcError> {
    let values = into_result(
        NumberKind::Float,
        vec![expect_float("a", a), expect_float("b", b)],
    )?;
    Ok((values[0], values[1]))
}

/// Require a single operand to be an integer.
pub(crate) fn require_integer(operand: &'static str, value: Number) -> Result<i64, CalcError> {
    let values = into_result(NumberKind::Integer, vec![expect_integer(operand, value)])?;
    Ok(values[0])
}
