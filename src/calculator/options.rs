//! Options for [`Calculator::calculate`](super::Calculator::calculate).

use serde::{Deserialize, Serialize};

/// Flags controlling the steps that follow a computation.
///
/// Missing JSON fields take their defaults: record to history, do not
/// print, do not round.
///
/// # Example
///
/// ```rust
/// use reckoner::calculator::CalcOptions;
///
/// let options = CalcOptions::new().print(true).round(2);
/// assert!(options.record);
/// assert_eq!(options.round_decimals, Some(2));
///
/// let parsed = CalcOptions::from_json(r#"{"record": false}"#).unwrap();
/// assert!(!parsed.record);
/// assert!(!parsed.print);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
    /// Append the result to the history
    pub record: bool,
    /// Print the result line to stdout
    pub print: bool,
    /// Round the result to this many decimal places before recording
    pub round_decimals: Option<u32>,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            record: true,
            print: false,
            round_decimals: None,
        }
    }
}

impl CalcOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    pub fn print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn round(mut self, decimals: u32) -> Self {
        self.round_decimals = Some(decimals);
        self
    }
}
