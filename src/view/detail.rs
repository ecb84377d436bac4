//! Detail overlay for one user.

use crate::view::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use crate::view::help::centered_rect;
use crate::view::styles::{BrowserStyles, FIELD_LABEL, MUTED_TEXT};
use crate::view_state::user_card::UserCard;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 10;

fn field(label: &str, value: impl Into<String>, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), FIELD_LABEL),
        Span::styled(value.into(), value_style),
    ])
}

/// Render the full record of `card` centered over the list.
pub fn render_detail_overlay(frame: &mut Frame, card: &UserCard, styles: &BrowserStyles) {
    let area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(card.name().to_string(), styles.name)),
        Line::from(Span::styled(
            format!("@{}", card.username()),
            styles.secondary,
        )),
        Line::default(),
        field("Email", card.email(), Style::default()),
        field(
            "Gender",
            card.gender().to_string(),
            styles.gender(card.gender()),
        ),
        field("Address", card.location(), Style::default()),
        Line::default(),
        field("Photo", card.large_url(), MUTED_TEXT),
        field("Thumbnail", card.thumbnail_url(), MUTED_TEXT),
        field("ID", card.id().as_str(), MUTED_TEXT),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" User ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };
    let hint = Paragraph::new(Line::from(Span::styled(" Press Esc to close ", MUTED_TEXT)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
