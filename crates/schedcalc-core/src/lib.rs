//! # schedcalc-core
//!
//! Core library for the SchedCalc utilization calculator: a digit-entry and
//! operator-chaining state machine whose "x" key evaluates the schedule
//! formula instead of multiplying.

pub mod advisory;
pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod formula;
pub mod key;
pub mod operator;
pub mod options;

// Re-exports
pub use advisory::{Advisory, Severity};
pub use constants::{exit_codes, ERROR_MARKER, MAX_DISPLAY_LEN};
pub use engine::{CalculatorEngine, EngineState, Snapshot};
pub use error::CalcError;
pub use formula::{schedule_formula, utilization_formula};
pub use key::{parse_keys, Digit, Key};
pub use operator::Operator;
pub use options::{EngineOptions, UtilizationPolicy};

/// Replay a keystroke script against a fresh engine.
///
/// Returns the final snapshot together with every advisory raised on the way.
///
/// # Example
/// ```
/// let (snapshot, advisories) = schedcalc_core::run_script("5x2=").unwrap();
/// assert_eq!(snapshot.display, "17952");
/// assert!(advisories.is_empty());
/// ```
pub fn run_script(script: &str) -> Result<(Snapshot, Vec<Advisory>), CalcError> {
    let keys = parse_keys(script)?;
    let mut engine = CalculatorEngine::new();
    let advisories = keys.into_iter().filter_map(|key| engine.press(key)).collect();
    Ok((engine.snapshot(), advisories))
}
