//! Core calculator types.
//!
//! This module contains the value types shared by every other module:
//! - Numeric operands via the `Number` enum
//! - Operation tags and their parsing
//! - The error type and its coarse kinds
//! - Append-only operation history

mod error;
mod history;
mod number;
mod operation;

pub use error::{CalcError, ErrorKind, OperandMismatch};
pub use history::{HistoryEntry, HistoryTracker};
pub use number::{round_to, Number, NumberKind};
pub use operation::Operation;
