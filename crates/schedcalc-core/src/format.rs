//! Text forms of results, rates, and the pending expression.

use crate::constants::INTEGRAL_DISPLAY_LIMIT;
use crate::operator::Operator;

/// Format an evaluation result for the display.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`; anything else uses the shortest decimal that round-trips.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < INTEGRAL_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format a utilization rate as a percentage with two decimals.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// Format the line shown above the display, e.g. `5 x`.
///
/// Empty when no operator is pending.
#[must_use]
pub fn format_pending(operand: Option<&str>, operator: Option<Operator>) -> String {
    match (operand, operator) {
        (Some(operand), Some(op)) => format!("{operand} {op}"),
        _ => String::new(),
    }
}

/// Parse an operand shown on the display.
///
/// Accepts anything `f64` parses (`"0."`, `".5"`) as long as it is finite.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
