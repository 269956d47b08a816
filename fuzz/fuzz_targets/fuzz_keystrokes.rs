#![no_main]

use libfuzzer_sys::fuzz_target;

use schedcalc_core::{CalculatorEngine, Digit, Key, Operator, ERROR_MARKER, MAX_DISPLAY_LEN};

fn key_from_byte(byte: u8) -> Key {
    match byte % 16 {
        n @ 0..=9 => Key::Digit(Digit::new(n).unwrap()),
        10 => Key::Decimal,
        11 => Key::Clear,
        12 => Key::Backspace,
        13 => Key::Equals,
        _ => Key::Operator(Operator::ALL[usize::from(byte >> 4) % Operator::ALL.len()]),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut engine = CalculatorEngine::new();
    for &byte in data.iter().take(512) {
        let key = key_from_byte(byte);
        let advisory = engine.press(key);

        let state = engine.state();
        // Only non-multiply operators raise advisories
        if let Key::Operator(op) = key {
            assert_eq!(advisory.is_some(), op != Operator::Multiply);
        } else {
            assert!(advisory.is_none());
        }
        assert!(!state.display.is_empty());
        assert!(state.display.matches('.').count() <= 1);
        assert_eq!(state.pending_operand.is_some(), state.pending_operator.is_some());
        if state.display != ERROR_MARKER && !state.reset_on_next_digit {
            assert!(state.display.len() <= MAX_DISPLAY_LEN);
        }
        if let Some(rate) = state.utilization_rate {
            assert!(rate.is_finite() && rate >= 0.0);
        }
    }
});
