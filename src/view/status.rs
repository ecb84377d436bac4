//! Status bar, error toast and delete confirmation prompt.

use crate::state::{BrowserState, Toast};
use crate::view::constants::TOAST_HEIGHT;
use crate::view::help::centered_rect;
use crate::view::styles::{BrowserStyles, KEY_HINT, MUTED_TEXT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Summary line: filter, count, page, activity and key hints.
pub fn status_line(state: &BrowserState, styles: &BrowserStyles) -> Line<'static> {
    let snapshot = state.snapshot();
    let mut spans = vec![
        Span::styled(format!(" {} ", snapshot.filter.label()), styles.active_tab),
        Span::raw(format!(
            "· {} users · page {} ",
            snapshot.len(),
            snapshot.cursor
        )),
    ];

    if snapshot.loading {
        spans.push(Span::styled("· loading… ", styles.loading));
    }
    if state.is_selection_mode() {
        spans.push(Span::styled(
            format!("· SELECT {} marked ", state.marked().len()),
            styles.marked,
        ));
    }

    spans.push(Span::styled("  ? ", KEY_HINT));
    spans.push(Span::styled("help ", MUTED_TEXT));
    spans.push(Span::styled("q ", KEY_HINT));
    spans.push(Span::styled("quit", MUTED_TEXT));

    Line::from(spans)
}

/// Draw the status line into `area`.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &BrowserState, styles: &BrowserStyles) {
    frame.render_widget(Paragraph::new(status_line(state, styles)), area);
}

/// Render `toast` as a bordered box anchored above `bottom_area`.
pub fn render_toast(frame: &mut Frame, bottom_area: Rect, toast: &Toast, styles: &BrowserStyles) {
    let frame_area = frame.area();
    let width = frame_area.width.min(60);
    let height = TOAST_HEIGHT.min(bottom_area.y);
    let area = Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width) / 2,
        y: bottom_area.y.saturating_sub(height),
        width,
        height,
    };
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::raw(toast.message.clone())),
        Line::from(Span::styled("any key to dismiss", MUTED_TEXT)),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", toast.title))
            .borders(Borders::ALL)
            .border_style(styles.error),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the "delete N users?" prompt centered on screen.
pub fn render_delete_prompt(frame: &mut Frame, marked: usize) {
    let outer = centered_rect(50, 30, frame.area());
    let area = Rect {
        height: outer.height.min(5),
        ..outer
    };
    frame.render_widget(Clear, area);

    let noun = if marked == 1 { "user" } else { "users" };
    let paragraph = Paragraph::new(vec![
        Line::from(format!("Delete {marked} {noun}?")),
        Line::from(vec![
            Span::styled("y", KEY_HINT),
            Span::raw(" confirm   "),
            Span::styled("n", KEY_HINT),
            Span::raw("/"),
            Span::styled("Esc", KEY_HINT),
            Span::raw(" cancel"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(paragraph, area);
}
