//! Error handling and exit codes.

use schedcalc_core::constants::exit_codes;
use schedcalc_core::CalcError;

/// Map a calculator error to its exit code.
#[must_use]
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::InvalidDigit(_) | CalcError::UnknownKey(_) | CalcError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
        CalcError::InvalidOperand(_) | CalcError::UnsupportedOperator(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CalcError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
