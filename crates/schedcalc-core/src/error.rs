//! Error type shared by the engine and its collaborators.

use crate::operator::Operator;

/// Errors raised by the calculator core.
///
/// None of these are fatal to an engine: evaluation failures are already
/// reflected on the display when they are returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A character outside `'0'..='9'` was used as a digit.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),

    /// A character in a keystroke script does not map to any key.
    #[error("unknown key: {0:?}")]
    UnknownKey(char),

    /// An operand could not be parsed as a finite number.
    #[error("invalid operand: {0:?}")]
    InvalidOperand(String),

    /// The pending operator has no evaluation semantics.
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(Operator),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            CalcError::InvalidOperand("Error".into()).to_string(),
            "invalid operand: \"Error\""
        );
        assert_eq!(
            CalcError::UnsupportedOperator(Operator::Divide).to_string(),
            "unsupported operator: ÷"
        );
        assert_eq!(CalcError::InvalidDigit('a').to_string(), "invalid digit: 'a'");
    }
}
