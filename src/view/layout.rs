//! Screen layout.
//!
//! Filter tabs on top, the user list in the middle and the status bar at the
//! bottom. Overlays are drawn last, topmost last.

use crate::state::{BrowserState, Overlay};
use crate::view::constants::{STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::detail::render_detail_overlay;
use crate::view::help::render_help_overlay;
use crate::view::list::render_user_list;
use crate::view::status::{render_delete_prompt, render_status_bar, render_toast};
use crate::view::styles::BrowserStyles;
use crate::view::tabs::render_filter_tabs;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Filter tabs row.
    pub tabs: Rect,
    /// Card list.
    pub list: Rect,
    /// Status bar row.
    pub status: Rect,
}

/// Split the terminal into tabs, list and status bar.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        tabs: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &BrowserState, styles: &BrowserStyles) {
    let areas = screen_areas(frame.area());

    render_filter_tabs(frame, areas.tabs, state.snapshot().filter, styles);
    render_user_list(frame, areas.list, state, styles);
    render_status_bar(frame, areas.status, state, styles);

    if let Some(toast) = state.toast() {
        render_toast(frame, areas.status, toast, styles);
    }

    match &state.overlay {
        Overlay::None => {}
        Overlay::ConfirmDelete => render_delete_prompt(frame, state.marked().len()),
        Overlay::Detail(card) => render_detail_overlay(frame, card, styles),
        Overlay::Help => render_help_overlay(frame),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
