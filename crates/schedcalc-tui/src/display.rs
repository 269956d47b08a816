//! Display panel: pending expression, live operand, utilization.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use schedcalc_core::Snapshot;

use crate::styles::ColorTheme;

/// Height of the display panel including borders.
pub const DISPLAY_HEIGHT: u16 = 5;

/// Build the three display lines for a snapshot.
#[must_use]
pub fn display_lines(snapshot: &Snapshot, theme: &ColorTheme) -> Vec<Line<'static>> {
    let utilization = snapshot
        .utilization_text()
        .map(|rate| format!("Utilization {rate}"))
        .unwrap_or_default();
    vec![
        Line::from(Span::styled(snapshot.pending_line(), theme.muted_style())),
        Line::from(Span::styled(
            snapshot.display.clone(),
            theme.display_style(snapshot.is_error()),
        )),
        Line::from(Span::styled(utilization, theme.muted_style())),
    ]
}

/// Render the display panel.
pub fn render_display(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(display_lines(snapshot, &theme))
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
