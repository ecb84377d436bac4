//! Browser UI state (pure).
//!
//! Everything the list screen needs besides the published data: cursor,
//! selection mode, marked cards, overlays and the error toast. Transitions
//! return a [`BrowserEffect`] that the shell forwards to the coordinator.

use crate::model::{Category, FetchError, KeyAction, UserId};
use crate::state::pagination::Snapshot;
use crate::view_state::user_card::{project, UserCard};
use std::collections::HashSet;

// ===== Overlay =====

/// Topmost layer over the list. At most one is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Only the list.
    #[default]
    None,
    /// Full record view for one card.
    Detail(UserCard),
    /// "Delete N records?" prompt for the marked cards.
    ConfirmDelete,
    /// Key binding reference.
    Help,
}

/// One-shot failure notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short heading for the error kind.
    pub title: &'static str,
    /// Error details.
    pub message: String,
}

impl Toast {
    fn from_error(error: &FetchError) -> Self {
        Self {
            title: error.title(),
            message: error.to_string(),
        }
    }
}

/// Command the shell must send after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    /// Nothing to send.
    None,
    /// Reload page 1.
    Refresh,
    /// Request the next page.
    LoadMore,
    /// Switch to this filter.
    SelectFilter(Category),
    /// Switch between single and double column.
    ToggleStyle,
    /// Hide these records.
    Delete(HashSet<UserId>),
    /// Leave the application.
    Quit,
}

// ===== BrowserState =====

/// UI state of the list/detail browser. Pure data, no side effects.
///
/// The displayed cards are a projection of the latest [`Snapshot`]; they are
/// replaced wholesale by [`BrowserState::apply_snapshot`].
#[derive(Debug, Clone)]
pub struct BrowserState {
    snapshot: Snapshot,
    cards: Vec<UserCard>,

    /// Index into `cards`. Always `< cards.len()` unless `cards` is empty.
    cursor: usize,

    selection_mode: bool,
    marked: HashSet<UserCard>,

    /// Open overlay.
    pub overlay: Overlay,
    toast: Option<Toast>,

    /// `error_serial` of the last snapshot whose error was shown.
    shown_error_serial: u64,

    /// Rows from the end at which moving the cursor requests the next page.
    load_more_threshold: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl BrowserState {
    /// Empty browser. A threshold below 1 is raised to 1.
    pub fn new(load_more_threshold: usize) -> Self {
        Self {
            snapshot: Snapshot::default(),
            cards: Vec::new(),
            cursor: 0,
            selection_mode: false,
            marked: HashSet::new(),
            overlay: Overlay::None,
            toast: None,
            shown_error_serial: 0,
            load_more_threshold: load_more_threshold.max(1),
        }
    }

    /// Latest applied snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Displayed cards, in list order.
    pub fn cards(&self) -> &[UserCard] {
        &self.cards
    }

    /// Index of the highlighted card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted card, if any.
    pub fn current_card(&self) -> Option<&UserCard> {
        self.cards.get(self.cursor)
    }

    /// Whether Enter marks cards instead of opening them.
    pub fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    /// Cards marked for deletion.
    pub fn marked(&self) -> &HashSet<UserCard> {
        &self.marked
    }

    /// Whether `card` is marked.
    pub fn is_marked(&self, card: &UserCard) -> bool {
        self.marked.contains(card)
    }

    /// Unread error notification.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Replace the displayed data with a newer snapshot.
    ///
    /// Re-clamps the cursor, drops marks for cards that left the list, and
    /// raises a toast when the snapshot carries an error not shown yet.
    /// A filter change moves the cursor back to the top.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        if snapshot.filter != self.snapshot.filter {
            self.cursor = 0;
        }
        if snapshot.error_serial > self.shown_error_serial {
            self.shown_error_serial = snapshot.error_serial;
            self.toast = snapshot.last_error.as_ref().map(Toast::from_error);
        }

        self.cards = project(&snapshot.records);
        self.snapshot = snapshot;

        self.cursor = self.cursor.min(self.cards.len().saturating_sub(1));
        let present: HashSet<&UserId> = self.cards.iter().map(UserCard::id).collect();
        self.marked.retain(|card| present.contains(card.id()));
    }

    fn columns(&self) -> usize {
        self.snapshot.style.columns()
    }

    /// Move the cursor to `target` (clamped) and report whether that lands
    /// within the load-more threshold of the end.
    ///
    /// The threshold counts grid rows, so in double style reaching either
    /// cell of the last row requests the next page.
    fn move_cursor(&mut self, target: usize) -> BrowserEffect {
        if self.cards.is_empty() {
            return BrowserEffect::None;
        }
        let last = self.cards.len() - 1;
        let target = target.min(last);
        if target == self.cursor {
            return BrowserEffect::None;
        }
        self.cursor = target;

        let columns = self.columns();
        let rows = self.cards.len().div_ceil(columns);
        let near_end = rows - target / columns <= self.load_more_threshold;
        if near_end && !self.snapshot.loading {
            BrowserEffect::LoadMore
        } else {
            BrowserEffect::None
        }
    }

    fn toggle_mark_current(&mut self) {
        if let Some(card) = self.cards.get(self.cursor).cloned() {
            if !self.marked.remove(&card) {
                self.marked.insert(card);
            }
        }
    }

    fn set_selection_mode(&mut self, on: bool) {
        self.selection_mode = on;
        if !on {
            self.marked.clear();
        }
    }
}

// ===== Transitions =====

/// Apply a key action to the browser.
///
/// An open toast swallows the next action (except `Quit`). An open overlay
/// only reacts to the actions that close it.
pub fn handle_browser_action(state: &mut BrowserState, action: KeyAction) -> BrowserEffect {
    if action == KeyAction::Quit {
        return BrowserEffect::Quit;
    }
    if state.toast.take().is_some() {
        return BrowserEffect::None;
    }

    match state.overlay {
        Overlay::None => {}
        Overlay::Help => {
            if matches!(action, KeyAction::Help | KeyAction::Back) {
                state.overlay = Overlay::None;
            }
            return BrowserEffect::None;
        }
        Overlay::Detail(_) => {
            if matches!(action, KeyAction::Back | KeyAction::Activate) {
                state.overlay = Overlay::None;
            }
            return BrowserEffect::None;
        }
        Overlay::ConfirmDelete => {
            if action == KeyAction::Back {
                state.overlay = Overlay::None;
            }
            return BrowserEffect::None;
        }
    }

    match action {
        KeyAction::CursorDown => {
            let target = state.cursor + state.columns();
            state.move_cursor(target)
        }
        KeyAction::CursorUp => {
            let target = state.cursor.saturating_sub(state.columns());
            state.move_cursor(target)
        }
        KeyAction::CursorFirst => state.move_cursor(0),
        KeyAction::CursorLast => state.move_cursor(usize::MAX),

        KeyAction::Refresh => BrowserEffect::Refresh,
        KeyAction::LoadMore => BrowserEffect::LoadMore,
        KeyAction::SelectFilter(filter) => select_filter(state, filter),
        KeyAction::NextFilter => select_filter(state, state.snapshot.filter.next()),
        KeyAction::PrevFilter => select_filter(state, state.snapshot.filter.prev()),

        KeyAction::ToggleStyle => BrowserEffect::ToggleStyle,

        KeyAction::ToggleSelectionMode => {
            state.set_selection_mode(!state.selection_mode);
            BrowserEffect::None
        }
        KeyAction::Activate => {
            if state.selection_mode {
                state.toggle_mark_current();
            } else if let Some(card) = state.current_card().cloned() {
                state.overlay = Overlay::Detail(card);
            }
            BrowserEffect::None
        }
        KeyAction::ToggleMark => {
            if state.selection_mode {
                state.toggle_mark_current();
            }
            BrowserEffect::None
        }
        KeyAction::DeleteMarked => {
            if state.selection_mode && !state.marked.is_empty() {
                state.overlay = Overlay::ConfirmDelete;
            }
            BrowserEffect::None
        }

        KeyAction::Back => {
            if state.selection_mode {
                state.set_selection_mode(false);
            }
            BrowserEffect::None
        }
        KeyAction::Help => {
            state.overlay = Overlay::Help;
            BrowserEffect::None
        }
        KeyAction::Quit => BrowserEffect::Quit,
    }
}

/// Answer the delete confirmation prompt.
///
/// Confirming sends the marked identities as one delete and leaves selection
/// mode. Either answer closes the prompt. No-op when no prompt is open.
pub fn handle_confirmation(state: &mut BrowserState, confirmed: bool) -> BrowserEffect {
    if state.overlay != Overlay::ConfirmDelete {
        return BrowserEffect::None;
    }
    state.overlay = Overlay::None;
    if !confirmed {
        return BrowserEffect::None;
    }

    let ids: HashSet<UserId> = state.marked.iter().map(|card| card.id().clone()).collect();
    state.set_selection_mode(false);
    BrowserEffect::Delete(ids)
}

fn select_filter(state: &BrowserState, filter: Category) -> BrowserEffect {
    if filter == state.snapshot.filter {
        BrowserEffect::None
    } else {
        BrowserEffect::SelectFilter(filter)
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
