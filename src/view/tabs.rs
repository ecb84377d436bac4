//! Filter tab bar widget.
//!
//! One tab per category, numbered like the keys that select them.

use crate::model::Category;
use crate::view::styles::BrowserStyles;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the filter tabs with `active` highlighted.
pub fn render_filter_tabs(
    frame: &mut Frame,
    area: Rect,
    active: Category,
    styles: &BrowserStyles,
) {
    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| Line::from(format!("{} {}", i + 1, category.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Users "))
        .style(Style::default().fg(Color::White))
        .highlight_style(styles.active_tab)
        .select(active.index());

    frame.render_widget(tabs, area);
}
