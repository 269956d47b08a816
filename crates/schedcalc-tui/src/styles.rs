//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use schedcalc_core::{Key, Severity};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub secondary: Color,
    pub destructive: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Magenta,
            secondary: Color::Blue,
            destructive: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for the main display value.
    #[must_use]
    pub fn display_style(&self, is_error: bool) -> Style {
        let fg = if is_error { self.destructive } else { self.text };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Get the style for a keypad button.
    #[must_use]
    pub fn button_style(&self, key: Key, highlighted: bool) -> Style {
        let fg = match key {
            Key::Operator(op) if !op.is_supported() => self.muted,
            Key::Operator(_) | Key::Equals => self.accent,
            Key::Clear | Key::Backspace => self.muted,
            Key::Digit(_) | Key::Decimal => self.secondary,
        };
        let style = Style::default().fg(fg);
        if highlighted {
            style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            style
        }
    }

    /// Get the style for a toast of the given severity.
    #[must_use]
    pub fn toast_style(&self, severity: Severity) -> Style {
        let fg = match severity {
            Severity::Error => self.destructive,
        };
        Style::default().fg(fg)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
