//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use schedcalc_core::{Key, Operator};

use crate::keymap::shortcut_for;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Yellow);
    let text = vec![Line::from(vec![
        Span::styled(shortcut_for(Key::Operator(Operator::Multiply)), key_style),
        Span::raw(": schedule | "),
        Span::styled(shortcut_for(Key::Equals), key_style),
        Span::raw(": evaluate | "),
        Span::styled(shortcut_for(Key::Backspace), key_style),
        Span::raw(": delete | "),
        Span::styled(shortcut_for(Key::Clear), key_style),
        Span::raw(": clear | "),
        Span::styled("q", key_style),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
