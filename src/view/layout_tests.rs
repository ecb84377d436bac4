//! Tests for screen layout rendering.

use super::*;
use crate::model::{Category, FetchError, KeyAction};
use crate::source::scripted::sample_user;
use crate::state::{handle_browser_action, Snapshot};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::Arc;

// ===== Test Helpers =====

fn buffer_to_string(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn render(state: &BrowserState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &BrowserStyles::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn loaded_state(ids: &[&str]) -> BrowserState {
    let mut state = BrowserState::default();
    state.apply_snapshot(Snapshot {
        records: Arc::new(ids.iter().map(|id| sample_user(id)).collect()),
        ..Snapshot::default()
    });
    state
}

// ===== Tests =====

#[test]
fn screen_areas_stack_tabs_list_and_status() {
    let areas = screen_areas(Rect::new(0, 0, 80, 24));

    assert_eq!(areas.tabs, Rect::new(0, 0, 80, TAB_BAR_HEIGHT));
    assert_eq!(areas.status, Rect::new(0, 23, 80, STATUS_BAR_HEIGHT));
    assert_eq!(areas.list.y, TAB_BAR_HEIGHT);
    assert_eq!(areas.list.height, 24 - TAB_BAR_HEIGHT - STATUS_BAR_HEIGHT);
}

#[test]
fn render_layout_draws_tabs_list_and_status() {
    let text = render(&loaded_state(&["A", "B"]));

    assert!(text.contains("1 All"));
    assert!(text.contains("FirstA LastA"));
    assert!(text.contains("FirstB LastB"));
    assert!(text.contains("2 users"));
}

#[test]
fn render_layout_shows_help_overlay() {
    let mut state = loaded_state(&["A"]);
    handle_browser_action(&mut state, KeyAction::Help);

    assert!(render(&state).contains("Keyboard Shortcuts"));
}

#[test]
fn render_layout_shows_detail_overlay() {
    let mut state = loaded_state(&["A"]);
    handle_browser_action(&mut state, KeyAction::Activate);

    assert!(render(&state).contains("Press Esc to close"));
}

#[test]
fn render_layout_shows_confirm_prompt() {
    let mut state = loaded_state(&["A", "B"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::DeleteMarked);

    assert!(render(&state).contains("Delete 1 user?"));
}

#[test]
fn render_layout_shows_error_toast() {
    let mut state = loaded_state(&["A"]);
    state.apply_snapshot(Snapshot {
        records: Arc::new(vec![sample_user("A")]),
        filter: Category::All,
        last_error: Some(FetchError::network("connection refused")),
        error_serial: 1,
        ..Snapshot::default()
    });

    let text = render(&state);

    assert!(text.contains("Network error"));
    assert!(text.contains("connection refused"));
}

#[test]
fn render_layout_survives_tiny_terminal() {
    let state = loaded_state(&["A"]);
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    assert!(terminal
        .draw(|frame| render_layout(frame, &state, &BrowserStyles::default()))
        .is_ok());
}
