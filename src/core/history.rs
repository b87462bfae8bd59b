//! Operation history tracking.
//!
//! Keeps an append-only record of completed operations together with
//! running aggregates over their results.

use super::number::Number;
use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Record of a single completed operation.
///
/// Entries are immutable once appended by [`HistoryTracker::record`].
///
/// # Example
///
/// ```rust
/// use reckoner::core::{HistoryTracker, Number, Operation};
///
/// let mut history = HistoryTracker::new();
/// history.record(Operation::Add, Number::Int(2), Number::Int(3), Number::Int(5));
///
/// let entry = &history.entries()[0];
/// assert_eq!(entry.operation, Operation::Add);
/// assert_eq!(entry.result, Number::Int(5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The operation performed
    pub operation: Operation,
    /// Left operand
    pub operand_a: Number,
    /// Right operand
    pub operand_b: Number,
    /// Recorded result
    pub result: Number,
    /// When the operation was recorded
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of completed operations with running aggregates.
///
/// `operation_count` always equals the number of entries, and the extrema
/// bound every recorded result. Before the first record the extrema hold
/// the infinity sentinels.
///
/// # Example
///
/// ```rust
/// use reckoner::core::{HistoryTracker, Number, Operation};
///
/// let mut history = HistoryTracker::new();
/// assert_eq!(history.largest_result(), f64::NEG_INFINITY);
///
/// history.record(Operation::Add, Number::Int(1), Number::Int(1), Number::Int(2));
/// history.record(Operation::Divide, Number::Float(1.0), Number::Float(4.0), Number::Float(0.25));
///
/// assert_eq!(history.operation_count(), 2);
/// assert_eq!(history.last_operation(), Some(Operation::Divide));
/// assert_eq!(history.largest_result(), 2.0);
/// assert_eq!(history.smallest_result(), 0.25);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "HistorySnapshot")]
pub struct HistoryTracker {
    entries: Vec<HistoryEntry>,
    operation_count: usize,
    last_operation: Option<Operation>,
    // Sentinels are not representable in JSON
    #[serde(skip_serializing_if = "is_lower_sentinel")]
    largest_result: f64,
    #[serde(skip_serializing_if = "is_upper_sentinel")]
    smallest_result: f64,
}

/// Deserialized form of a tracker. Aggregates are rebuilt from the entries.
#[derive(Deserialize)]
struct HistorySnapshot {
    #[serde(default)]
    entries: Vec<HistoryEntry>,
}

impl From<HistorySnapshot> for HistoryTracker {
    fn from(snapshot: HistorySnapshot) -> Self {
        let mut history = Self::new();
        for entry in snapshot.entries {
            history.push(entry);
        }
        history
    }
}

fn lower_sentinel() -> f64 {
    f64::NEG_INFINITY
}

fn upper_sentinel() -> f64 {
    f64::INFINITY
}

fn is_lower_sentinel(value: &f64) -> bool {
    *value == f64::NEG_INFINITY
}

fn is_upper_sentinel(value: &f64) -> bool {
    *value == f64::INFINITY
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTracker {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            operation_count: 0,
            last_operation: None,
            largest_result: lower_sentinel(),
            smallest_result: upper_sentinel(),
        }
    }

    /// Record a completed operation.
    ///
    /// Appends an entry stamped with the current time and updates the
    /// count, last operation and extrema. Never fails.
    pub fn record(&mut self, operation: Operation, a: Number, b: Number, result: Number) {
        self.push(HistoryEntry {
            operation,
            operand_a: a,
            operand_b: b,
            result,
            timestamp: Utc::now(),
        });

        debug!(
            operation = %operation,
            result = %result,
            count = self.operation_count,
            "recorded operation"
        );
    }

    fn push(&mut self, entry: HistoryEntry) {
        let value = entry.result.as_f64();

        self.operation_count += 1;
        self.last_operation = Some(entry.operation);
        if value > self.largest_result {
            self.largest_result = value;
        }
        if value < self.smallest_result {
            self.smallest_result = value;
        }
        self.entries.push(entry);
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn operation_count(&self) -> usize {
        self.operation_count
    }

    pub fn last_operation(&self) -> Option<Operation> {
        self.last_operation
    }

    /// Largest result recorded so far, or `-inf` when empty.
    pub fn largest_result(&self) -> f64 {
        self.largest_result
    }

    /// Smallest result recorded so far, or `+inf` when empty.
    pub fn smallest_result(&self) -> f64 {
        self.smallest_result
    }

    /// Elapsed time between the first and last entry.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Number {
        Number::Int(v)
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryTracker::new();

        assert!(history.is_empty());
        assert_eq!(history.operation_count(), 0);
        assert_eq!(history.last_operation(), None);
        assert!(history.last_entry().is_none());
        assert!(history.duration().is_none());
        assert_eq!(history.largest_result(), f64::NEG_INFINITY);
        assert_eq!(history.smallest_result(), f64::INFINITY);
    }

    #[test]
    fn record_adds_entry() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Subtract, int(5), int(3), int(2));

        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.operation_count(), 1);
        let entry = history.last_entry().unwrap();
        assert_eq!(entry.operation, Operation::Subtract);
        assert_eq!(entry.operand_a, int(5));
        assert_eq!(entry.operand_b, int(3));
        assert_eq!(entry.result, int(2));
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Add, int(1), int(2), int(3));
        history.record(Operation::Multiply, int(2), int(4), int(8));
        history.record(Operation::Subtract, int(0), int(9), int(-9));

        let ops: Vec<_> = history.entries().iter().map(|e| e.operation).collect();
        assert_eq!(
            ops,
            vec![Operation::Add, Operation::Multiply, Operation::Subtract]
        );
        assert_eq!(history.last_operation(), Some(Operation::Subtract));
    }

    #[test]
    fn extrema_track_all_results() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Add, int(1), int(2), int(3));
        history.record(Operation::Multiply, int(2), int(4), int(8));
        history.record(Operation::Subtract, int(0), int(9), int(-9));
        history.record(
            Operation::Divide,
            Number::Float(1.0),
            Number::Float(2.0),
            Number::Float(0.5),
        );

        assert_eq!(history.largest_result(), 8.0);
        assert_eq!(history.smallest_result(), -9.0);
    }

    #[test]
    fn single_result_is_both_extrema() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Add, int(20), int(22), int(42));

        assert_eq!(history.largest_result(), 42.0);
        assert_eq!(history.smallest_result(), 42.0);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Add, int(1), int(1), int(2));
        std::thread::sleep(std::time::Duration::from_millis(10));
        history.record(Operation::Add, int(2), int(2), int(4));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = HistoryTracker::new();

        history.record(Operation::Add, int(2), int(3), int(5));
        history.record(
            Operation::Divide,
            Number::Float(6.0),
            Number::Float(2.0),
            Number::Float(3.0),
        );

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: HistoryTracker = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.entries(), history.entries());
        assert_eq!(deserialized.operation_count(), 2);
        assert_eq!(deserialized.last_operation(), Some(Operation::Divide));
    }

    #[test]
    fn empty_history_roundtrips_sentinels() {
        let history = HistoryTracker::new();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: HistoryTracker = serde_json::from_str(&json).unwrap();

        assert!(deserialized.is_empty());
        assert_eq!(deserialized.largest_result(), f64::NEG_INFINITY);
        assert_eq!(deserialized.smallest_result(), f64::INFINITY);
    }

    #[test]
    fn deserialize_rebuilds_aggregates_from_entries() {
        let mut source = HistoryTracker::new();
        source.record(Operation::Add, int(1), int(1), int(2));
        source.record(Operation::Subtract, int(1), int(5), int(-4));

        let mut json = serde_json::to_value(&source).unwrap();
        json["operation_count"] = serde_json::json!(7);
        json["last_operation"] = serde_json::Value::Null;
        json["largest_result"] = serde_json::json!(-5.0);
        json["smallest_result"] = serde_json::json!(100.0);

        let history: HistoryTracker = serde_json::from_value(json).unwrap();

        assert_eq!(history.operation_count(), history.entries().len());
        assert_eq!(history.operation_count(), 2);
        assert_eq!(history.last_operation(), Some(Operation::Subtract));
        assert_eq!(history.largest_result(), 2.0);
        assert_eq!(history.smallest_result(), -4.0);
    }

    #[test]
    fn deserialize_without_entries_is_empty() {
        let history: HistoryTracker =
            serde_json::from_str(r#"{"operation_count": 3, "last_operation": "add"}"#).unwrap();

        assert!(history.is_empty());
        assert_eq!(history.operation_count(), 0);
        assert_eq!(history.last_operation(), None);
        assert_eq!(history.largest_result(), f64::NEG_INFINITY);
    }
}
