//! Schedule and utilization formulas.
//!
//! The "x" key does not multiply. It computes how many pieces of the two
//! entered sizes a sheet yields (`schedule_formula`) and how much of the
//! sheet area those pieces use (`utilization_formula`).

use crate::constants::{
    CUT_ALLOWANCE, SCHEDULE_CONSTANT, SCHEDULE_MULTIPLIER, SHEET_HEIGHT, SHEET_WIDTH,
};

/// Number of pieces scheduled for operands `a` and `b`.
///
/// `floor(236.5 / (a + 0.3)) * floor(236.5 / (b + 0.3)) * 4`, with both
/// floors applied before the final product.
///
/// # Example
/// ```
/// assert_eq!(schedcalc_core::schedule_formula(5.0, 2.0), 17952.0);
/// ```
#[must_use]
pub fn schedule_formula(a: f64, b: f64) -> f64 {
    let term1 = (SCHEDULE_CONSTANT / (a + CUT_ALLOWANCE)).floor();
    let term2 = (SCHEDULE_CONSTANT / (b + CUT_ALLOWANCE)).floor();
    term1 * term2 * SCHEDULE_MULTIPLIER
}

/// Sheet utilization, in percent, of `count` pieces of size `a` by `b`.
///
/// Returns 0 when the sheet area is zero. No rounding is applied.
#[must_use]
pub fn utilization_formula(a: f64, b: f64, count: f64) -> f64 {
    utilization_with_area(a, b, count, SHEET_WIDTH * SHEET_HEIGHT)
}

fn utilization_with_area(a: f64, b: f64, count: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let rate = (a * b * count) / denominator;
    rate * 100.0
}
