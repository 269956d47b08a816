//! Keypad keys and keystroke scripts.

use std::fmt;

use crate::error::CalcError;
use crate::operator::Operator;

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// The digit as an ASCII character.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|v| u8::try_from(v).ok())
            .and_then(Self::new)
            .ok_or(CalcError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A keypad gesture understood by [`crate::CalculatorEngine::press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Clear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl Key {
    /// Map a keystroke character to a key.
    ///
    /// `c`/`C` clear everything and `<` deletes the last character.
    pub fn from_char(c: char) -> Result<Self, CalcError> {
        if let Ok(digit) = Digit::try_from(c) {
            return Ok(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_char(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' | ',' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            '<' | '\u{8}' => Ok(Self::Backspace),
            other => Err(CalcError::UnknownKey(other)),
        }
    }

    /// Label printed on the keypad button.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parse a keystroke script such as `"5x2="` into keys.
///
/// Whitespace of any kind is ignored, so scripts may be spaced for
/// readability or end in a newline.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, CalcError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Key::from_char)
        .collect()
}
