//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{KEY_HINT, MUTED_TEXT, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered in `area` with the given percentage of its
/// width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn shortcut(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), KEY_HINT),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Navigation", SECTION_HEADER)),
        shortcut("j/↓", "Next user"),
        shortcut("k/↑", "Previous user"),
        shortcut("g/Home", "First user"),
        shortcut("G/End", "Last user (loads more)"),
        Line::default(),
        Line::from(Span::styled("Data", SECTION_HEADER)),
        shortcut("r", "Refresh from page 1"),
        shortcut("m", "Load next page"),
        shortcut("1/2/3", "Filter: All / Male / Female"),
        shortcut("]/Tab", "Next filter"),
        shortcut("[/Shift+Tab", "Previous filter"),
        Line::default(),
        Line::from(Span::styled("View", SECTION_HEADER)),
        shortcut("Enter", "Open details"),
        shortcut("v", "Toggle one/two columns"),
        Line::default(),
        Line::from(Span::styled("Selection", SECTION_HEADER)),
        shortcut("s", "Enter/leave selection mode"),
        shortcut("Space/Enter", "Mark or unmark user"),
        shortcut("d", "Delete marked users"),
        shortcut("y/n", "Confirm or cancel delete"),
        Line::default(),
        Line::from(Span::styled("Application", SECTION_HEADER)),
        shortcut("Esc", "Close overlay / leave selection"),
        shortcut("?", "Toggle this help"),
        shortcut("q/Ctrl+c", "Quit"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
