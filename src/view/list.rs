//! User list widget.
//!
//! Cards are laid out in rows of `ListStyle::columns()` cells. The window
//! scrolls so the row holding the cursor is always visible.

use crate::state::BrowserState;
use crate::view::constants::{CARD_GAP, CARD_HEIGHT};
use crate::view::styles::BrowserStyles;
use crate::view_state::user_card::UserCard;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// First row to draw so that `cursor_row` is inside a window of
/// `visible_rows` rows. Keeps the cursor on the last visible row when it is
/// past the first screen.
pub fn scroll_offset(cursor_row: usize, visible_rows: usize) -> usize {
    cursor_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Render the list area for the current browser state.
pub fn render_user_list(frame: &mut Frame, area: Rect, state: &BrowserState, styles: &BrowserStyles) {
    let cards = state.cards();
    if cards.is_empty() {
        render_empty(frame, area, state, styles);
        return;
    }

    let columns = state.snapshot().style.columns();
    let row_height = CARD_HEIGHT + CARD_GAP;
    let visible_rows = usize::from((area.height + CARD_GAP) / row_height).max(1);
    let first_row = scroll_offset(state.cursor() / columns, visible_rows);

    let rows = cards.chunks(columns).enumerate().skip(first_row).take(visible_rows);
    for (offset, (row_index, row)) in rows.enumerate() {
        let y = area.y + offset as u16 * row_height;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(1)
            .split(row_area);

        for (column, card) in row.iter().enumerate() {
            let index = row_index * columns + column;
            render_card(frame, cells[column], card, index == state.cursor(), state, styles);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &UserCard,
    is_cursor: bool,
    state: &BrowserState,
    styles: &BrowserStyles,
) {
    let marker = if state.is_selection_mode() {
        if state.is_marked(card) {
            Span::styled("[x] ", styles.marked)
        } else {
            Span::raw("[ ] ")
        }
    } else if is_cursor {
        Span::styled("▶ ", styles.name)
    } else {
        Span::raw("  ")
    };
    let indent = " ".repeat(marker.width());

    let lines = vec![
        Line::from(vec![
            marker,
            Span::styled(card.name().to_string(), styles.name),
            Span::raw(" "),
            Span::styled(format!("({})", card.gender()), styles.gender(card.gender())),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(card.email().to_string(), styles.secondary),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(card.location().to_string(), styles.secondary),
        ]),
    ];

    let mut paragraph = Paragraph::new(lines);
    if is_cursor {
        paragraph = paragraph.style(styles.cursor);
    }
    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, area: Rect, state: &BrowserState, styles: &BrowserStyles) {
    let message = if state.snapshot().loading {
        Line::from(Span::styled("Loading users…", styles.loading))
    } else {
        Line::from(Span::styled(
            "No users. Press r to refresh.",
            styles.secondary,
        ))
    };
    let top = area.height / 2;
    let line_area = Rect::new(area.x, area.y + top, area.width, 1.min(area.height));
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), line_area);
}
