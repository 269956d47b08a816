//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use schedcalc_core::{Key, Operator};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a keypad key to the engine.
    Press(Key),
    /// Hide the current toast.
    Dismiss,
    Quit,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::Dismiss,
        KeyCode::Enter => KeyAction::Press(Key::Equals),
        KeyCode::Backspace => KeyAction::Press(Key::Backspace),
        KeyCode::Delete => KeyAction::Press(Key::Clear),
        KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
        _ => KeyAction::None,
    }
}

/// Keyboard hint for a keypad key, shown in the footer.
#[must_use]
pub fn shortcut_for(key: Key) -> &'static str {
    match key {
        Key::Clear => "c/Del",
        Key::Backspace => "Bksp",
        Key::Equals => "Enter/=",
        Key::Operator(Operator::Multiply) => "x/*",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedcalc_core::Digit;

    fn press(code: KeyCode) -> KeyAction {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn digit_keys() {
        for (c, v) in [('0', 0), ('5', 5), ('9', 9)] {
            assert_eq!(
                press(KeyCode::Char(c)),
                KeyAction::Press(Key::Digit(Digit::new(v).unwrap()))
            );
        }
    }

    #[test]
    fn operator_keys() {
        assert_eq!(
            press(KeyCode::Char('*')),
            KeyAction::Press(Key::Operator(Operator::Multiply))
        );
        assert_eq!(
            press(KeyCode::Char('x')),
            KeyAction::Press(Key::Operator(Operator::Multiply))
        );
        assert_eq!(
            press(KeyCode::Char('/')),
            KeyAction::Press(Key::Operator(Operator::Divide))
        );
        assert_eq!(
            press(KeyCode::Char('%')),
            KeyAction::Press(Key::Operator(Operator::Percent))
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(press(KeyCode::Enter), KeyAction::Press(Key::Equals));
        assert_eq!(press(KeyCode::Char('=')), KeyAction::Press(Key::Equals));
        assert_eq!(press(KeyCode::Backspace), KeyAction::Press(Key::Backspace));
        assert_eq!(press(KeyCode::Delete), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::Char('c')), KeyAction::Press(Key::Clear));
        assert_eq!(press(KeyCode::Char('.')), KeyAction::Press(Key::Decimal));
    }

    #[test]
    fn dismiss_key() {
        assert_eq!(press(KeyCode::Tab), KeyAction::Dismiss);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(press(KeyCode::Char('z')), KeyAction::None);
        assert_eq!(press(KeyCode::F(1)), KeyAction::None);
    }

    #[test]
    fn shortcuts() {
        assert_eq!(shortcut_for(Key::Clear), "c/Del");
        assert_eq!(shortcut_for(Key::Decimal), "");
    }
}
