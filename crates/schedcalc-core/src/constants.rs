//! Constants for the schedule formula, display limits, and exit codes.

/// Numerator of both floor-divided terms of the schedule formula.
///
/// Derived from the usable sheet edge: 246.2 - 5 * 2 + 0.3.
pub const SCHEDULE_CONSTANT: f64 = 236.5;

/// Allowance added to each operand before dividing.
pub const CUT_ALLOWANCE: f64 = 0.3;

/// Multiplier applied to the product of both terms.
pub const SCHEDULE_MULTIPLIER: f64 = 4.0;

/// Sheet width used as the first factor of the utilization denominator.
pub const SHEET_WIDTH: f64 = 515.0;

/// Sheet height used as the second factor of the utilization denominator.
pub const SHEET_HEIGHT: f64 = 510.0;

/// Schedule count used by [`crate::UtilizationPolicy::SingleSchedule`].
pub const SINGLE_SCHEDULE_COUNT: f64 = 1.0;

/// Maximum number of characters the display accepts while entering a number.
pub const MAX_DISPLAY_LEN: usize = 15;

/// Text shown on the display after a failed evaluation.
pub const ERROR_MARKER: &str = "Error";

/// Display value of a freshly created or cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Integral results below this magnitude render without a fractional part.
pub const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or keystroke script.
    pub const ERROR_CONFIG: i32 = 4;
}
