//! Trigger handling.
//!
//! Pure reducer that applies one user or lifecycle trigger to the store and
//! tells the caller which fetch, if any, to start.

use crate::model::{Category, ListStyle, PageNumber, UserId};
use crate::state::pagination::{PaginationState, RequestId};
use std::collections::HashSet;
use tracing::debug;

/// Event that may change the list or start a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// First load, fired once when the coordinator starts.
    InitialLoad,
    /// Reload page 1 of the active filter. Latest-wins.
    Refresh,
    /// Request the page after the cursor.
    LoadMore,
    /// Switch filter and start a fresh filter session. Latest-wins.
    SelectFilter(Category),
    /// Hide records locally, permanently for this process.
    Delete(HashSet<UserId>),
    /// Set the list layout.
    SetStyle(ListStyle),
    /// Switch between single and double column.
    ToggleStyle,
}

/// How a completed page is folded into the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// The page becomes the whole list (page 1 of a new generation).
    Replace,
    /// The page is appended after the existing list.
    Append,
}

/// Record of one issued fetch.
///
/// The completion must present it unchanged; it is applied only while
/// `id` is pending and `generation`/`filter` still match the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Request identity; must still be pending on completion.
    pub id: RequestId,
    /// Store generation when issued.
    pub generation: u64,
    /// Filter the page was requested for.
    pub filter: Category,
    /// Requested page.
    pub page: PageNumber,
    /// How the result is folded into the list.
    pub mode: MergeMode,
}

/// What the caller must do after a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Start a fetch for this ticket.
    Fetch(FetchTicket),
    /// Records were hidden. `removed` counts those that left the list.
    Deleted {
        /// Records that left the visible list.
        removed: usize,
    },
    /// State changed without a fetch.
    Updated,
    /// Nothing changed.
    Unchanged,
}

impl TriggerOutcome {
    /// Ticket of a `Fetch` outcome.
    pub fn ticket(&self) -> Option<&FetchTicket> {
        match self {
            TriggerOutcome::Fetch(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// Apply `trigger` to `state`.
///
/// Latest-wins triggers (`InitialLoad`, `Refresh`, `SelectFilter`) start a
/// new generation, so every outstanding fetch is discarded on arrival.
/// `LoadMore` advances the cursor before the fetch runs; a failed fetch
/// leaves it advanced.
///
/// Refresh keeps the current list and seen-set until its page 1 commits, so
/// a failed refresh leaves the list intact.
pub fn handle_trigger(state: &mut PaginationState, trigger: Trigger) -> TriggerOutcome {
    debug!(?trigger, generation = state.generation, "Handling trigger");

    match trigger {
        // Refresh defers clearing `records` and `seen` to its Replace commit,
        // which rebuilds both from page 1. SelectFilter below clears eagerly.
        Trigger::InitialLoad | Trigger::Refresh => {
            state.cursor = PageNumber::FIRST;
            state.supersede_outstanding();
            TriggerOutcome::Fetch(issue(state, MergeMode::Replace))
        }

        Trigger::LoadMore => {
            state.cursor = state.cursor.next();
            TriggerOutcome::Fetch(issue(state, MergeMode::Append))
        }

        Trigger::SelectFilter(filter) => {
            state.filter = filter;
            state.cursor = PageNumber::FIRST;
            state.seen.clear();
            state.records_mut().clear();
            state.supersede_outstanding();
            TriggerOutcome::Fetch(issue(state, MergeMode::Replace))
        }

        Trigger::Delete(ids) => {
            if ids.is_empty() {
                return TriggerOutcome::Deleted { removed: 0 };
            }
            let before = state.records.len();
            let hits = state.records.iter().any(|u| ids.contains(u.id()));
            if hits {
                state.records_mut().retain(|u| !ids.contains(u.id()));
            }
            state.deleted.extend(ids);
            let removed = before - state.records.len();
            if removed > 0 {
                state.touch();
            }
            TriggerOutcome::Deleted { removed }
        }

        Trigger::SetStyle(style) => {
            if state.style == style {
                return TriggerOutcome::Unchanged;
            }
            state.style = style;
            state.touch();
            TriggerOutcome::Updated
        }

        Trigger::ToggleStyle => {
            state.style = state.style.toggled();
            state.touch();
            TriggerOutcome::Updated
        }
    }
}

fn issue(state: &mut PaginationState, mode: MergeMode) -> FetchTicket {
    let id = state.issue_request();
    state.touch();
    FetchTicket {
        id,
        generation: state.generation,
        filter: state.filter,
        page: state.cursor,
        mode,
    }
}

#[cfg(test)]
#[path = "trigger_handler_tests.rs"]
mod tests;
