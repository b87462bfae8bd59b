//! Calculator orchestration.
//!
//! `Calculator` owns an [`ArithmeticUnit`] and a [`HistoryTracker`] and
//! sequences the steps of a dispatch-by-name request:
//!
//! 1. parse the operation name
//! 2. compute
//! 3. round (optional)
//! 4. record (optional)
//! 5. print (optional)
//!
//! Each step is also available on its own for callers that want to
//! sequence them differently.

mod options;
pub mod report;

pub use options::CalcOptions;

use crate::analysis::{self, NumberAnalysis};
use crate::arithmetic::{ArithmeticUnit, Outcome};
use crate::core::{CalcError, HistoryTracker, Number, Operation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Running figures over analyzed numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Analysis requests, including rejected ones
    pub attempts: usize,
    pub last_analyzed: Option<i64>,
    pub largest_analyzed: Option<i64>,
    pub smallest_analyzed: Option<i64>,
}

impl AnalysisStats {
    fn observe(&mut self, n: i64) {
        self.last_analyzed = Some(n);
        self.largest_analyzed = Some(self.largest_analyzed.map_or(n, |m| m.max(n)));
        self.smallest_analyzed = Some(self.smallest_analyzed.map_or(n, |m| m.min(n)));
    }
}

/// Arithmetic with history.
///
/// # Example
///
/// ```rust
/// use reckoner::calculator::{CalcOptions, Calculator};
/// use reckoner::core::{ErrorKind, Number, Operation};
///
/// let mut calc = Calculator::new();
///
/// let outcome = calc
///     .calculate("multiply", Number::Int(6), Number::Int(7), &CalcOptions::default())
///     .unwrap();
/// assert_eq!(outcome.value(), Number::Int(42));
/// assert_eq!(calc.last_result(), Some(Number::Int(42)));
/// assert_eq!(calc.history().last_operation(), Some(Operation::Multiply));
///
/// let err = calc
///     .calculate("bogus", Number::Int(1), Number::Int(2), &CalcOptions::default())
///     .unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidOperation);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    unit: ArithmeticUnit,
    history: HistoryTracker,
    analysis: AnalysisStats,
    last_result: Option<Number>,
    successful_operations: usize,
    error_count: usize,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `operation`, compute, then round, record and print according
    /// to `options`.
    ///
    /// On failure nothing is recorded and [`last_result`](Self::last_result)
    /// keeps its previous value.
    pub fn calculate(
        &mut self,
        operation: &str,
        a: Number,
        b: Number,
        options: &CalcOptions,
    ) -> Result<Outcome, CalcError> {
        let result = operation
            .parse::<Operation>()
            .and_then(|op| self.compute(op, a, b).map(|outcome| (op, outcome)));

        let (op, mut outcome) = match result {
            Ok(pair) => pair,
            Err(e) => {
                self.error_count += 1;
                warn!(operation, error = %e, "calculation failed");
                return Err(e);
            }
        };

        if let Some(decimals) = options.round_decimals {
            outcome = outcome.rounded(decimals);
        }
        if options.record {
            self.record(op, a, b, &outcome);
        }
        if options.print {
            println!("{}", report::format_line(op, a, b, &outcome));
        }

        self.successful_operations += 1;
        self.last_result = Some(outcome.value());
        Ok(outcome)
    }

    /// Compute without recording or printing.
    pub fn compute(&self, operation: Operation, a: Number, b: Number) -> Result<Outcome, CalcError> {
        self.unit.apply(operation, a, b)
    }

    /// Record an outcome in the history.
    pub fn record(&mut self, operation: Operation, a: Number, b: Number, outcome: &Outcome) {
        self.history.record(operation, a, b, outcome.value());
    }

    /// Analyze an integer and update the analysis figures.
    pub fn analyze_number(&mut self, number: Number) -> Result<NumberAnalysis, CalcError> {
        self.analysis.attempts += 1;

        let analysis = analysis::analyze_number(number).inspect_err(|e| {
            self.error_count += 1;
            warn!(%number, error = %e, "analysis failed");
        })?;

        let n = analysis.number();
        self.analysis.observe(n);
        self.last_result = Some(Number::Int(n));
        debug!(
            number = n,
            prime = analysis.is_prime(),
            "analyzed number"
        );
        Ok(analysis)
    }

    pub fn unit(&self) -> &ArithmeticUnit {
        &self.unit
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn analysis_stats(&self) -> &AnalysisStats {
        &self.analysis
    }

    /// Primary value of the most recent successful calculation or analysis.
    pub fn last_result(&self) -> Option<Number> {
        self.last_result
    }

    pub fn successful_operations(&self) -> usize {
        self.successful_operations
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }
}
