//! Result line formatting.

use super::Calculator;
use crate::arithmetic::Outcome;
use crate::core::{CalcError, Number, Operation};

/// Format `"{a} {symbol} {b} = {result}"`.
pub fn format_line(operation: Operation, a: Number, b: Number, outcome: &Outcome) -> String {
    format!("{a} {} {b} = {outcome}", operation.symbol())
}

/// Compute without recording and format the result line.
pub fn evaluate_line(
    calc: &Calculator,
    operation: Operation,
    a: Number,
    b: Number,
) -> Result<String, CalcError> {
    let outcome = calc.compute(operation, a, b)?;
    Ok(format_line(operation, a, b, &outcome))
}
