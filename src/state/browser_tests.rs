//! Tests for browser module.

use super::*;
use crate::model::{ListStyle, PageNumber};
use crate::source::scripted::sample_user;
use std::sync::Arc;

fn snapshot(ids: &[&str]) -> Snapshot {
    Snapshot {
        records: Arc::new(ids.iter().map(|id| sample_user(id)).collect()),
        ..Snapshot::default()
    }
}

fn browser(ids: &[&str]) -> BrowserState {
    let mut state = BrowserState::default();
    state.apply_snapshot(snapshot(ids));
    state
}

fn id_set(ids: &[&str]) -> HashSet<UserId> {
    ids.iter().map(|id| UserId::new(*id).unwrap()).collect()
}

// ===== Cursor and infinite scroll =====

#[test]
fn cursor_moves_within_list() {
    let mut state = browser(&["A", "B", "C", "D"]);

    handle_browser_action(&mut state, KeyAction::CursorDown);
    handle_browser_action(&mut state, KeyAction::CursorDown);
    assert_eq!(state.cursor(), 2);

    handle_browser_action(&mut state, KeyAction::CursorUp);
    assert_eq!(state.cursor(), 1);

    handle_browser_action(&mut state, KeyAction::CursorFirst);
    assert_eq!(state.cursor(), 0);
}

#[test]
fn reaching_last_row_requests_next_page() {
    let mut state = browser(&["A", "B", "C"]);

    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::None
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::LoadMore
    );
    assert_eq!(state.cursor(), 2);
}

#[test]
fn staying_on_last_row_does_not_repeat_request() {
    let mut state = browser(&["A", "B"]);
    handle_browser_action(&mut state, KeyAction::CursorLast);

    let again = handle_browser_action(&mut state, KeyAction::CursorDown);

    assert_eq!(again, BrowserEffect::None);
}

#[test]
fn no_scroll_request_while_loading() {
    let mut state = BrowserState::default();
    state.apply_snapshot(Snapshot {
        loading: true,
        ..snapshot(&["A", "B"])
    });

    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorLast),
        BrowserEffect::None
    );
    assert_eq!(state.cursor(), 1);
}

#[test]
fn threshold_requests_before_last_row() {
    let mut state = BrowserState::new(3);
    state.apply_snapshot(snapshot(&["A", "B", "C", "D", "E"]));

    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::None
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::LoadMore
    );
}

#[test]
fn double_style_moves_by_row() {
    let mut state = BrowserState::new(1);
    state.apply_snapshot(Snapshot {
        style: ListStyle::Double,
        ..snapshot(&["A", "B", "C", "D", "E", "F"])
    });

    handle_browser_action(&mut state, KeyAction::CursorDown);

    assert_eq!(state.cursor(), 2);
}

#[test]
fn double_style_last_row_left_cell_requests_next_page() {
    let mut state = BrowserState::new(1);
    state.apply_snapshot(Snapshot {
        style: ListStyle::Double,
        ..snapshot(&["A", "B", "C", "D"])
    });

    let effect = handle_browser_action(&mut state, KeyAction::CursorDown);

    assert_eq!(state.cursor(), 2);
    assert_eq!(effect, BrowserEffect::LoadMore);
}

#[test]
fn double_style_threshold_counts_rows() {
    let mut state = BrowserState::new(2);
    state.apply_snapshot(Snapshot {
        style: ListStyle::Double,
        ..snapshot(&["A", "B", "C", "D", "E", "F", "G"])
    });

    // Rows: [A,B] [C,D] [E,F] [G]; row 1 is three rows from the end
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::None
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::LoadMore
    );
    assert_eq!(state.cursor(), 4);
}

#[test]
fn cursor_is_clamped_when_list_shrinks() {
    let mut state = browser(&["A", "B", "C"]);
    handle_browser_action(&mut state, KeyAction::CursorLast);

    state.apply_snapshot(snapshot(&["A"]));

    assert_eq!(state.cursor(), 0);
    assert_eq!(state.current_card().unwrap().id().as_str(), "A");
}

#[test]
fn filter_change_resets_cursor() {
    let mut state = browser(&["A", "B", "C"]);
    handle_browser_action(&mut state, KeyAction::CursorDown);

    state.apply_snapshot(Snapshot {
        filter: Category::Male,
        ..snapshot(&["M1", "M2", "M3"])
    });

    assert_eq!(state.cursor(), 0);
}

#[test]
fn empty_list_ignores_cursor_movement() {
    let mut state = BrowserState::default();
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::CursorDown),
        BrowserEffect::None
    );
    assert_eq!(state.current_card(), None);
}

// ===== Data triggers =====

#[test]
fn data_keys_map_to_effects() {
    let mut state = browser(&["A"]);

    assert_eq!(
        handle_browser_action(&mut state, KeyAction::Refresh),
        BrowserEffect::Refresh
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::LoadMore),
        BrowserEffect::LoadMore
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::ToggleStyle),
        BrowserEffect::ToggleStyle
    );
}

#[test]
fn selecting_active_filter_is_noop() {
    let mut state = browser(&["A"]);
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::SelectFilter(Category::All)),
        BrowserEffect::None
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::SelectFilter(Category::Female)),
        BrowserEffect::SelectFilter(Category::Female)
    );
}

#[test]
fn filter_cycling_wraps() {
    let mut state = browser(&["A"]);
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::NextFilter),
        BrowserEffect::SelectFilter(Category::Male)
    );
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::PrevFilter),
        BrowserEffect::SelectFilter(Category::Female)
    );
}

// ===== Selection and delete =====

#[test]
fn marking_requires_selection_mode() {
    let mut state = browser(&["A", "B"]);

    handle_browser_action(&mut state, KeyAction::ToggleMark);
    assert!(state.marked().is_empty());

    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::CursorDown);
    handle_browser_action(&mut state, KeyAction::Activate);

    assert_eq!(state.marked().len(), 2);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn marking_twice_unmarks() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    assert!(state.marked().is_empty());
}

#[test]
fn leaving_selection_mode_clears_marks() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);

    handle_browser_action(&mut state, KeyAction::Back);

    assert!(!state.is_selection_mode());
    assert!(state.marked().is_empty());
}

#[test]
fn delete_asks_for_confirmation_then_sends_ids() {
    let mut state = browser(&["A", "B", "C"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::CursorLast);
    handle_browser_action(&mut state, KeyAction::ToggleMark);

    assert_eq!(
        handle_browser_action(&mut state, KeyAction::DeleteMarked),
        BrowserEffect::None
    );
    assert_eq!(state.overlay, Overlay::ConfirmDelete);

    let effect = handle_confirmation(&mut state, true);

    assert_eq!(effect, BrowserEffect::Delete(id_set(&["A", "C"])));
    assert_eq!(state.overlay, Overlay::None);
    assert!(!state.is_selection_mode());
    assert!(state.marked().is_empty());
}

#[test]
fn declined_confirmation_keeps_marks() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::DeleteMarked);

    assert_eq!(handle_confirmation(&mut state, false), BrowserEffect::None);
    assert_eq!(state.overlay, Overlay::None);
    assert_eq!(state.marked().len(), 1);
    assert!(state.is_selection_mode());
}

#[test]
fn escape_cancels_confirmation() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);
    handle_browser_action(&mut state, KeyAction::DeleteMarked);

    handle_browser_action(&mut state, KeyAction::Back);

    assert_eq!(state.overlay, Overlay::None);
    assert!(state.is_selection_mode());
}

#[test]
fn delete_without_marks_does_nothing() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::DeleteMarked);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn confirmation_without_prompt_is_noop() {
    let mut state = browser(&["A"]);
    assert_eq!(handle_confirmation(&mut state, true), BrowserEffect::None);
}

#[test]
fn marks_for_removed_cards_are_dropped() {
    let mut state = browser(&["A", "B"]);
    handle_browser_action(&mut state, KeyAction::ToggleSelectionMode);
    handle_browser_action(&mut state, KeyAction::ToggleMark);

    state.apply_snapshot(snapshot(&["B"]));

    assert!(state.marked().is_empty());
}

// ===== Overlays =====

#[test]
fn activate_opens_detail_and_back_closes_it() {
    let mut state = browser(&["A", "B"]);
    handle_browser_action(&mut state, KeyAction::CursorDown);

    handle_browser_action(&mut state, KeyAction::Activate);
    match &state.overlay {
        Overlay::Detail(card) => assert_eq!(card.id().as_str(), "B"),
        other => panic!("expected detail overlay, got {other:?}"),
    }

    handle_browser_action(&mut state, KeyAction::Back);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn detail_overlay_blocks_list_actions() {
    let mut state = browser(&["A", "B"]);
    handle_browser_action(&mut state, KeyAction::Activate);

    let effect = handle_browser_action(&mut state, KeyAction::Refresh);

    assert_eq!(effect, BrowserEffect::None);
    assert!(matches!(state.overlay, Overlay::Detail(_)));
}

#[test]
fn help_toggles() {
    let mut state = browser(&[]);
    handle_browser_action(&mut state, KeyAction::Help);
    assert_eq!(state.overlay, Overlay::Help);
    handle_browser_action(&mut state, KeyAction::Help);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn quit_works_from_any_overlay() {
    let mut state = browser(&["A"]);
    handle_browser_action(&mut state, KeyAction::Help);
    assert_eq!(
        handle_browser_action(&mut state, KeyAction::Quit),
        BrowserEffect::Quit
    );
}

// ===== Toast =====

#[test]
fn new_error_raises_toast_once() {
    let mut state = browser(&["A"]);
    let failed = Snapshot {
        last_error: Some(FetchError::network("offline")),
        error_serial: 1,
        ..snapshot(&["A"])
    };

    state.apply_snapshot(failed.clone());
    let toast = state.toast().expect("toast raised");
    assert_eq!(toast.title, "Network error");
    assert!(toast.message.contains("offline"));

    handle_browser_action(&mut state, KeyAction::CursorDown);
    assert!(state.toast().is_none());

    state.apply_snapshot(Snapshot {
        cursor: PageNumber::new(2).unwrap(),
        ..failed
    });
    assert!(state.toast().is_none());
}

#[test]
fn toast_swallows_the_dismissing_key() {
    let mut state = browser(&["A"]);
    state.apply_snapshot(Snapshot {
        last_error: Some(FetchError::decode("bad")),
        error_serial: 1,
        ..snapshot(&["A"])
    });

    let effect = handle_browser_action(&mut state, KeyAction::Refresh);

    assert_eq!(effect, BrowserEffect::None);
    assert!(state.toast().is_none());
}

#[test]
fn repeated_identical_error_raises_new_toast() {
    let mut state = browser(&["A"]);
    let error = Some(FetchError::network("offline"));
    state.apply_snapshot(Snapshot {
        last_error: error.clone(),
        error_serial: 1,
        ..snapshot(&["A"])
    });
    handle_browser_action(&mut state, KeyAction::Back);

    state.apply_snapshot(Snapshot {
        last_error: error,
        error_serial: 2,
        ..snapshot(&["A"])
    });

    assert!(state.toast().is_some());
}
