//! Keypad grid: layout, rendering, and mouse hit testing.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use schedcalc_core::Key;

use crate::styles::ColorTheme;

const COLUMNS: u32 = 4;

/// Button characters and column spans, row by row.
const LAYOUT: [&[(char, u16)]; 5] = [
    &[('c', 1), ('<', 1), ('%', 1), ('÷', 1)],
    &[('7', 1), ('8', 1), ('9', 1), ('x', 1)],
    &[('4', 1), ('5', 1), ('6', 1), ('-', 1)],
    &[('1', 1), ('2', 1), ('3', 1), ('+', 1)],
    &[('0', 2), ('.', 1), ('=', 1)],
];

/// Compute the rectangle of every keypad button inside `area`.
#[must_use]
pub fn button_rects(area: Rect) -> Vec<(Key, Rect)> {
    #[allow(clippy::cast_possible_truncation)]
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Ratio(1, LAYOUT.len() as u32);
            LAYOUT.len()
        ])
        .split(area);

    let mut rects = Vec::with_capacity(20);
    for (row_area, buttons) in rows.iter().zip(LAYOUT) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS); COLUMNS as usize])
            .split(*row_area);

        let mut column = 0usize;
        for &(c, span) in buttons {
            let Ok(key) = Key::from_char(c) else {
                continue;
            };
            let last = (column + usize::from(span) - 1).min(cells.len() - 1);
            rects.push((key, cells[column].union(cells[last])));
            column += usize::from(span);
        }
    }
    rects
}

/// Find the button under a terminal cell.
#[must_use]
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Key> {
    button_rects(area).into_iter().find_map(|(key, rect)| {
        let inside = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        inside.then_some(key)
    })
}

/// Render the keypad, highlighting the most recently pressed key.
pub fn render_keypad(frame: &mut Frame, area: Rect, highlighted: Option<Key>) {
    let theme = ColorTheme::default();
    for (key, rect) in button_rects(area) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        let button = Paragraph::new(key.label())
            .style(theme.button_style(key, highlighted == Some(key)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, rect);
    }
}
