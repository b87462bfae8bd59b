//! Reckoner: strictly typed arithmetic with operation history
//!
//! Reckoner keeps its arithmetic pure and its bookkeeping explicit. The
//! arithmetic unit computes without side effects, the history tracker
//! records, and the calculator sequences the two.
//!
//! # Core Concepts
//!
//! - **Number**: Operands carry their kind (`Int` or `Float`) at runtime
//! - **ArithmeticUnit**: `add`, `subtract` and `multiply` accept integers
//!   only; `divide` accepts floats only
//! - **HistoryTracker**: Append-only record of completed operations with
//!   running extrema
//! - **Analysis**: Primality, parity and the answer to everything
//!
//! # Example
//!
//! ```rust
//! use reckoner::calculator::{CalcOptions, Calculator};
//! use reckoner::core::Number;
//!
//! let mut calc = Calculator::new();
//! let options = CalcOptions::new().round(2);
//!
//! calc.calculate("add", Number::Int(10), Number::Int(5), &options).unwrap();
//! let outcome = calc
//!     .calculate("divide", Number::Float(1.0), Number::Float(3.0), &options)
//!     .unwrap();
//!
//! assert_eq!(outcome.value(), Number::Float(0.33));
//! assert_eq!(calc.history().operation_count(), 2);
//! assert_eq!(calc.history().largest_result(), 15.0);
//! ```

pub mod analysis;
pub mod arithmetic;
pub mod calculator;
pub mod core;

// Re-export commonly used types
pub use analysis::{analyze_number, NumberAnalysis};
pub use arithmetic::{ArithmeticUnit, Division, DivisionInfo, Outcome, Precision};
pub use calculator::{CalcOptions, Calculator};
pub use crate::core::{CalcError, ErrorKind, HistoryEntry, HistoryTracker, Number, Operation};
