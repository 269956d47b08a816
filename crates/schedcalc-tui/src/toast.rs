//! Transient notification for advisories.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use schedcalc_core::Advisory;

use crate::styles::ColorTheme;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// An advisory shown for a limited number of ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub advisory: Advisory,
    pub remaining_ticks: u32,
}

impl Toast {
    #[must_use]
    pub fn new(advisory: Advisory, ticks: u32) -> Self {
        Self {
            advisory,
            remaining_ticks: ticks,
        }
    }

    /// Count down one tick. Returns whether the toast is still visible.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

/// Bottom-right corner of `area` where the toast is drawn.
#[must_use]
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    )
}

/// Render a toast over whatever is already drawn in `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let theme = ColorTheme::default();
    let style = theme.toast_style(toast.advisory.severity);
    let rect = toast_area(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(
            format!(" {} ", toast.advisory.title),
            style.add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(Line::from(toast.advisory.message.as_str()))
        .style(theme.text_style())
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
