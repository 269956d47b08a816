//! Advisory notices returned to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// How prominently an advisory should be surfaced.
///
/// Every advisory the engine raises today is an error-level notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A non-blocking notice raised by an engine operation.
///
/// The engine stays fully usable after an advisory; collaborators decide how
/// to show it (a toast, a stderr line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Advisory {
    /// Advisory raised when an operator without evaluation semantics is selected.
    #[must_use]
    pub fn unsupported_operator(op: Operator) -> Self {
        tracing::debug!(operator = %op, "unsupported operator advisory");
        Self {
            severity: Severity::Error,
            title: "Unsupported Operation".to_string(),
            message: "Only multiplication 'x' is supported for this calculator.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operator_advisory() {
        let advisory = Advisory::unsupported_operator(Operator::Add);
        assert_eq!(advisory.severity, Severity::Error);
        assert_eq!(advisory.title, "Unsupported Operation");
        assert!(advisory.message.contains("'x'"));
    }

    #[test]
    fn advisory_serializes() {
        let advisory = Advisory::unsupported_operator(Operator::Percent);
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["title"], "Unsupported Operation");
    }
}
