//! # schedcalc-tui
//!
//! Interactive terminal calculator using ratatui with Elm architecture.

pub mod display;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod keypad;
pub mod messages;
pub mod model;
pub mod styles;
pub mod toast;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use toast::Toast;
