//! The calculator engine: digit entry, operator chaining, and evaluation.
//!
//! `CalculatorEngine` owns a single `EngineState` and is the only thing that
//! mutates it. Presentation layers forward gestures through the operations
//! below and re-render from `snapshot()` afterwards.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisory::Advisory;
use crate::constants::{ERROR_MARKER, INITIAL_DISPLAY, MAX_DISPLAY_LEN};
use crate::error::CalcError;
use crate::format::{format_pending, format_rate, format_result, parse_operand};
use crate::formula::{schedule_formula, utilization_formula};
use crate::key::{Digit, Key};
use crate::operator::Operator;
use crate::options::EngineOptions;

/// Mutable state of one calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Live operand, or [`ERROR_MARKER`] after a failed evaluation.
    pub display: String,
    /// Operand captured when an operator was selected.
    pub pending_operand: Option<String>,
    /// Operator awaiting a second operand.
    pub pending_operator: Option<Operator>,
    /// The next digit or decimal point starts a fresh number.
    pub reset_on_next_digit: bool,
    /// Utilization of the last successful multiply evaluation, in percent.
    pub utilization_rate: Option<f64>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            reset_on_next_digit: false,
            utilization_rate: None,
        }
    }
}

/// Read-only view of the engine handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    pub pending_operand: Option<String>,
    pub pending_operator: Option<Operator>,
    pub utilization_rate: Option<f64>,
}

impl Snapshot {
    /// Line shown above the display, e.g. `5 x`.
    #[must_use]
    pub fn pending_line(&self) -> String {
        format_pending(self.pending_operand.as_deref(), self.pending_operator)
    }

    /// Utilization formatted with two decimals, if present.
    #[must_use]
    pub fn utilization_text(&self) -> Option<String> {
        self.utilization_rate.map(format_rate)
    }

    /// Whether the display shows the error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}

/// Digit-entry and operator-chaining state machine.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: EngineState,
    options: EngineOptions,
}

impl CalculatorEngine {
    /// Create an engine with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options.
    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            state: EngineState::default(),
            options,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Options the engine was created with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Read-only snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.state.display.clone(),
            pending_operand: self.state.pending_operand.clone(),
            pending_operator: self.state.pending_operator,
            utilization_rate: self.state.utilization_rate,
        }
    }

    /// Append a digit, or start a new number in reset mode.
    ///
    /// Digits beyond [`MAX_DISPLAY_LEN`] characters are dropped.
    pub fn enter_digit(&mut self, digit: Digit) {
        let state = &mut self.state;
        if state.reset_on_next_digit {
            state.display = digit.as_char().to_string();
            state.reset_on_next_digit = false;
        } else if state.display.len() < MAX_DISPLAY_LEN {
            if state.display == INITIAL_DISPLAY {
                state.display.clear();
            }
            state.display.push(digit.as_char());
        }
        debug!(display = %state.display, "digit entered");
    }

    /// Add a decimal point, or start a new `0.` number in reset mode.
    pub fn enter_decimal_point(&mut self) {
        let state = &mut self.state;
        if state.reset_on_next_digit {
            state.display = "0.".to_string();
            state.reset_on_next_digit = false;
        } else if !state.display.contains('.') && state.display.len() < MAX_DISPLAY_LEN {
            state.display.push('.');
        }
        debug!(display = %state.display, "decimal point entered");
    }

    /// Reset to the initial state.
    pub fn clear_all(&mut self) {
        self.state = EngineState::default();
        debug!("cleared");
    }

    /// Delete the last character; in reset mode this clears everything.
    pub fn backspace(&mut self) {
        if self.state.reset_on_next_digit {
            self.clear_all();
            return;
        }
        self.state.display.pop();
        if self.state.display.is_empty() {
            self.state.display = INITIAL_DISPLAY.to_string();
        }
        debug!(display = %self.state.display, "backspace");
    }

    /// Select an operator.
    ///
    /// Only multiply changes state. Every other operator leaves the engine
    /// untouched and returns an advisory for the presentation layer. When an
    /// operator is already pending and a second operand has been typed, the
    /// pending evaluation runs first and its result becomes the new pending
    /// operand, giving left-to-right chaining.
    #[must_use = "unsupported operators are reported through the returned advisory"]
    pub fn select_operator(&mut self, op: Operator) -> Option<Advisory> {
        match op {
            Operator::Multiply => {
                if self.state.pending_operator.is_some() && !self.state.reset_on_next_digit {
                    if let Err(err) = self.evaluate() {
                        debug!(%err, "chained evaluation failed");
                    }
                }
                self.state.pending_operand = Some(self.state.display.clone());
                self.state.pending_operator = Some(op);
                self.state.reset_on_next_digit = true;
                debug!(operand = %self.state.display, operator = %op, "operator pending");
                None
            }
            unsupported @ (Operator::Add
            | Operator::Subtract
            | Operator::Divide
            | Operator::Percent) => {
                warn!(operator = %unsupported, "unsupported operator selected");
                Some(Advisory::unsupported_operator(unsupported))
            }
        }
    }

    /// Evaluate the pending operation (the `=` key).
    ///
    /// Returns `Ok(None)` when nothing is pending. On failure the display
    /// already shows [`ERROR_MARKER`] and the error is returned for logging;
    /// the engine stays usable either way.
    pub fn evaluate(&mut self) -> Result<Option<f64>, CalcError> {
        let (Some(operand), Some(op)) = (
            self.state.pending_operand.as_deref(),
            self.state.pending_operator,
        ) else {
            return Ok(None);
        };

        let outcome = self.compute(operand, op);

        self.state.pending_operand = None;
        self.state.pending_operator = None;
        self.state.reset_on_next_digit = true;

        match outcome {
            Ok((result, rate)) => {
                self.state.display = format_result(result);
                self.state.utilization_rate = rate;
                debug!(display = %self.state.display, utilization = ?rate, "evaluated");
                Ok(Some(result))
            }
            Err(err) => {
                self.state.display = ERROR_MARKER.to_string();
                self.state.utilization_rate = None;
                warn!(%err, "evaluation failed");
                Err(err)
            }
        }
    }

    /// Dispatch a keypad gesture to the matching operation.
    #[must_use = "unsupported operators are reported through the returned advisory"]
    pub fn press(&mut self, key: Key) -> Option<Advisory> {
        match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Decimal => self.enter_decimal_point(),
            Key::Clear => self.clear_all(),
            Key::Backspace => self.backspace(),
            Key::Operator(op) => return self.select_operator(op),
            Key::Equals => {
                // The failure is already on the display.
                let _ = self.evaluate();
            }
        }
        None
    }

    fn compute(&self, operand: &str, op: Operator) -> Result<(f64, Option<f64>), CalcError> {
        let first =
            parse_operand(operand).ok_or_else(|| CalcError::InvalidOperand(operand.to_string()))?;
        let second = parse_operand(&self.state.display)
            .ok_or_else(|| CalcError::InvalidOperand(self.state.display.clone()))?;

        match op {
            Operator::Multiply => {
                let result = schedule_formula(first, second);
                let rate = self
                    .options
                    .utilization
                    .count(result)
                    .map(|count| utilization_formula(first, second, count));
                Ok((result, rate))
            }
            other => Err(CalcError::UnsupportedOperator(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::parse_keys;
    use crate::options::UtilizationPolicy;

    fn digit(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    fn run(engine: &mut CalculatorEngine, script: &str) -> Vec<Advisory> {
        parse_keys(script)
            .unwrap()
            .into_iter()
            .filter_map(|key| engine.press(key))
            .collect()
    }

    fn engine_after(script: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        run(&mut engine, script);
        engine
    }

    #[test]
    fn initial_state() {
        let engine = CalculatorEngine::new();
        let state = engine.state();
        assert_eq!(state.display, "0");
        assert!(state.pending_operand.is_none());
        assert!(state.pending_operator.is_none());
        assert!(!state.reset_on_next_digit);
        assert!(state.utilization_rate.is_none());
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit(digit('0'));
        assert_eq!(engine.state().display, "0");
        engine.enter_digit(digit('7'));
        assert_eq!(engine.state().display, "7");
        engine.enter_digit(digit('0'));
        assert_eq!(engine.state().display, "70");
    }

    #[test]
    fn digits_capped_at_fifteen() {
        let engine = engine_after("1234567890123456789");
        assert_eq!(engine.state().display, "123456789012345");
    }

    #[test]
    fn decimal_point_once() {
        let engine = engine_after("1.2.3");
        assert_eq!(engine.state().display, "1.23");
    }

    #[test]
    fn decimal_point_from_zero() {
        let engine = engine_after(".5");
        assert_eq!(engine.state().display, "0.5");
    }

    #[test]
    fn decimal_point_respects_cap() {
        let engine = engine_after("123456789012345.");
        assert_eq!(engine.state().display, "123456789012345");
    }

    #[test]
    fn decimal_in_reset_mode_starts_new_number() {
        let mut engine = engine_after("5x");
        engine.enter_decimal_point();
        assert_eq!(engine.state().display, "0.");
        assert!(!engine.state().reset_on_next_digit);
        assert_eq!(engine.state().pending_operand.as_deref(), Some("5"));
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut engine = engine_after("5x2=");
        assert!(engine.state().utilization_rate.is_some());
        engine.clear_all();
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut engine = engine_after("5x2");
        engine.clear_all();
        let once = engine.state().clone();
        engine.clear_all();
        assert_eq!(engine.state(), &once);
    }

    #[test]
    fn backspace_trims_last_character() {
        let mut engine = engine_after("123");
        engine.backspace();
        assert_eq!(engine.state().display, "12");
        engine.backspace();
        engine.backspace();
        assert_eq!(engine.state().display, "0");
        engine.backspace();
        assert_eq!(engine.state().display, "0");
    }

    #[test]
    fn backspace_in_reset_mode_clears_all() {
        let mut engine = engine_after("5x");
        engine.backspace();
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn backspace_on_error_marker_clears_all() {
        let mut engine = engine_after("5x");
        engine.state.pending_operand = Some("bogus".into());
        let _ = engine.evaluate();
        assert_eq!(engine.state().display, ERROR_MARKER);
        engine.backspace();
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn select_multiply_captures_operand() {
        let mut engine = engine_after("5");
        assert!(engine.select_operator(Operator::Multiply).is_none());
        let state = engine.state();
        assert_eq!(state.pending_operand.as_deref(), Some("5"));
        assert_eq!(state.pending_operator, Some(Operator::Multiply));
        assert!(state.reset_on_next_digit);
        assert_eq!(state.display, "5");
    }

    #[test]
    fn double_multiply_recaptures_without_evaluating() {
        let engine = engine_after("5xx");
        let state = engine.state();
        assert_eq!(state.pending_operand.as_deref(), Some("5"));
        assert_eq!(state.display, "5");
        assert!(state.utilization_rate.is_none());
    }

    #[test]
    fn unsupported_operators_leave_state_untouched() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Divide,
            Operator::Percent,
        ] {
            let mut engine = engine_after("5x2");
            let before = engine.state().clone();
            let advisory = engine.select_operator(op);
            assert!(advisory.is_some(), "{op} should raise an advisory");
            assert_eq!(engine.state(), &before);
        }
    }

    #[test]
    fn unsupported_operator_raises_one_advisory_per_keystroke() {
        let mut engine = CalculatorEngine::new();
        let advisories = run(&mut engine, "5+-/%");
        assert_eq!(advisories.len(), 4);
        assert_eq!(engine.state().display, "5");
    }

    #[test]
    fn five_times_two_scenario() {
        let mut engine = CalculatorEngine::new();
        engine.enter_digit(digit('5'));
        assert_eq!(engine.state().display, "5");
        let _ = engine.select_operator(Operator::Multiply);
        assert_eq!(engine.state().pending_operand.as_deref(), Some("5"));
        assert!(engine.state().reset_on_next_digit);
        engine.enter_digit(digit('2'));
        assert_eq!(engine.state().display, "2");
        assert_eq!(engine.evaluate(), Ok(Some(17952.0)));

        let state = engine.state();
        assert_eq!(state.display, "17952");
        assert!(state.pending_operand.is_none());
        assert!(state.pending_operator.is_none());
        assert!(state.reset_on_next_digit);
        let rate = state.utilization_rate.unwrap();
        assert!((rate - 68.349_514_563_106_8).abs() < 1e-9);
    }

    #[test]
    fn chained_multiply_evaluates_left_to_right() {
        let mut engine = engine_after("3x4");
        let _ = engine.select_operator(Operator::Multiply);
        // 3 x 4 has been evaluated and becomes the pending operand.
        assert_eq!(engine.state().display, "15620");
        assert_eq!(engine.state().pending_operand.as_deref(), Some("15620"));
        assert_eq!(engine.state().pending_operator, Some(Operator::Multiply));
        assert!(engine.state().reset_on_next_digit);

        run(&mut engine, "5=");
        let expected = schedule_formula(15620.0, 5.0);
        assert_eq!(engine.state().display, format_result(expected));
    }

    #[test]
    fn equals_without_pending_is_noop() {
        let mut engine = engine_after("42");
        assert_eq!(engine.evaluate(), Ok(None));
        assert_eq!(engine.state().display, "42");
        assert!(!engine.state().reset_on_next_digit);
    }

    #[test]
    fn equals_right_after_operator_uses_same_operand() {
        let engine = engine_after("5x=");
        assert_eq!(
            engine.state().display,
            format_result(schedule_formula(5.0, 5.0))
        );
    }

    #[test]
    fn digit_after_result_starts_fresh() {
        let engine = engine_after("5x2=7");
        assert_eq!(engine.state().display, "7");
        assert!(!engine.state().reset_on_next_digit);
    }

    #[test]
    fn invalid_operand_shows_error_marker() {
        let mut engine = engine_after("5x2");
        engine.state.pending_operand = Some("abc".into());
        let err = engine.evaluate().unwrap_err();
        assert_eq!(err, CalcError::InvalidOperand("abc".into()));

        let state = engine.state();
        assert_eq!(state.display, ERROR_MARKER);
        assert!(state.utilization_rate.is_none());
        assert!(state.reset_on_next_digit);
        assert!(state.pending_operand.is_none());
        assert!(state.pending_operator.is_none());
    }

    #[test]
    fn error_marker_as_operand_fails_evaluation() {
        let mut engine = engine_after("5x2");
        engine.state.pending_operand = Some("abc".into());
        let _ = engine.evaluate();
        // Multiplying the marker itself keeps failing until cleared.
        run(&mut engine, "x3=");
        assert_eq!(engine.state().display, ERROR_MARKER);
        assert!(engine.state().utilization_rate.is_none());
    }

    #[test]
    fn recovery_after_error() {
        let mut engine = engine_after("5x2=");
        engine.state.pending_operand = Some("abc".into());
        engine.state.pending_operator = Some(Operator::Multiply);
        let _ = engine.evaluate();
        engine.enter_digit(digit('8'));
        let state = engine.state();
        assert_eq!(state.display, "8");
        assert!(!state.reset_on_next_digit);
        assert!(state.utilization_rate.is_none());
    }

    #[test]
    fn unsupported_pending_operator_is_an_error() {
        let mut engine = engine_after("5x2=");
        engine.state.display = "2".into();
        engine.state.reset_on_next_digit = false;
        engine.state.pending_operand = Some("5".into());
        engine.state.pending_operator = Some(Operator::Divide);
        assert_eq!(
            engine.evaluate(),
            Err(CalcError::UnsupportedOperator(Operator::Divide))
        );
        assert_eq!(engine.state().display, ERROR_MARKER);
        assert!(engine.state().utilization_rate.is_none());
        assert!(engine.state().pending_operator.is_none());
    }

    #[test]
    fn single_schedule_policy() {
        let mut engine = CalculatorEngine::with_options(EngineOptions::with_utilization(
            UtilizationPolicy::SingleSchedule,
        ));
        run(&mut engine, "100x100=");
        assert_eq!(engine.state().display, "16");
        let rate = engine.state().utilization_rate.unwrap();
        assert!((rate - 3.807_348_181_991_243).abs() < 1e-9);
    }

    #[test]
    fn disabled_policy_has_no_rate() {
        let mut engine =
            CalculatorEngine::with_options(EngineOptions::with_utilization(UtilizationPolicy::Disabled));
        run(&mut engine, "5x2=");
        assert_eq!(engine.state().display, "17952");
        assert!(engine.state().utilization_rate.is_none());
    }

    #[test]
    fn decimal_operands() {
        let engine = engine_after("0.5x0.7=");
        assert_eq!(engine.state().display, "278480");
    }

    #[test]
    fn trailing_decimal_point_operand() {
        let engine = engine_after("5.x2.=");
        assert_eq!(engine.state().display, "17952");
    }

    #[test]
    fn snapshot_exposes_pending_line() {
        let engine = engine_after("5x");
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.pending_line(), "5 x");
        assert_eq!(snapshot.display, "5");
        assert!(snapshot.utilization_text().is_none());
        assert!(!snapshot.is_error());
    }

    #[test]
    fn snapshot_utilization_text() {
        let snapshot = engine_after("5x2=").snapshot();
        assert_eq!(snapshot.utilization_text().as_deref(), Some("68.35%"));
        assert_eq!(snapshot.pending_line(), "");
    }

    #[test]
    fn snapshot_serializes() {
        let snapshot = engine_after("5x").snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["display"], "5");
        assert_eq!(json["pending_operand"], "5");
        assert_eq!(json["pending_operator"], "multiply");
        assert!(json["utilization_rate"].is_null());
    }

    #[test]
    fn engines_are_independent() {
        let mut a = CalculatorEngine::new();
        let b = CalculatorEngine::new();
        run(&mut a, "9x");
        assert_eq!(b.state(), &EngineState::default());
    }
}
