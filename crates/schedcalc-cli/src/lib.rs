//! # schedcalc-cli
//!
//! Keystroke-script presentation, CLI output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIPresenter, SessionPresenter};
