//! TUI header panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use schedcalc_core::UtilizationPolicy;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, policy: UtilizationPolicy) {
    let theme = ColorTheme::default();
    let text = vec![
        Line::from(vec![
            Span::styled("ScheduleCrunch", theme.header_style()),
            Span::styled(" — Utilization Calculator", theme.text_style()),
        ]),
        Line::from(Span::styled(
            format!("utilization: {policy}"),
            theme.muted_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
