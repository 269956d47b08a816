//! Operator keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Operators selectable on the keypad.
///
/// Only [`Operator::Multiply`] has evaluation semantics; the others are
/// accepted as keystrokes and answered with an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
    ];

    /// Symbol shown on the keypad and in the pending-expression line.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Whether evaluation is defined for this operator.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Multiply)
    }

    /// Map a single keystroke character to an operator.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            'x' | 'X' | '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" => Ok(Self::Add),
            "subtract" | "minus" => Ok(Self::Subtract),
            "multiply" | "times" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            "percent" => Ok(Self::Percent),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c).ok_or(CalcError::UnknownKey(c)),
                    _ => Err(CalcError::Config(format!("unknown operator: {s}"))),
                }
            }
        }
    }
}
