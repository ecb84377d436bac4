//! Fetch completion handling.
//!
//! Pure reducer that folds a finished fetch into the store, or drops it when
//! a later trigger has superseded it.

use crate::model::FetchError;
use crate::source::PageBatch;
use crate::state::merge::merge;
use crate::state::pagination::PaginationState;
use crate::state::trigger_handler::{FetchTicket, MergeMode};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Effect of one completion on the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The page was merged. `appended` counts the records it contributed.
    Applied {
        /// Records the page contributed.
        appended: usize,
    },
    /// The fetch failed; the error was surfaced.
    Failed,
    /// The ticket was superseded; nothing changed.
    Discarded,
}

/// Apply the result of the fetch described by `ticket`.
///
/// A ticket is stale when it is no longer pending or its generation or
/// filter differ from the store's. Stale completions leave the store
/// untouched, including for failures.
pub fn handle_completion(
    state: &mut PaginationState,
    ticket: FetchTicket,
    result: Result<PageBatch, FetchError>,
) -> CompletionOutcome {
    let current = state.pending.contains(&ticket.id)
        && ticket.generation == state.generation
        && ticket.filter == state.filter;
    if !current {
        debug!(
            request = %ticket.id,
            page = %ticket.page,
            ticket_generation = ticket.generation,
            generation = state.generation,
            "Discarding superseded completion"
        );
        return CompletionOutcome::Discarded;
    }

    state.pending.remove(&ticket.id);
    state.touch();

    let batch = match result {
        Ok(batch) => batch,
        Err(error) => {
            warn!(request = %ticket.id, page = %ticket.page, %error, "Fetch failed");
            state.last_error = Some(error);
            state.error_serial += 1;
            return CompletionOutcome::Failed;
        }
    };

    let appended = match ticket.mode {
        MergeMode::Replace => {
            let (records, seen) = merge(Vec::new(), HashSet::new(), &state.deleted, batch.records);
            let appended = records.len();
            state.records = Arc::new(records);
            state.seen = seen;
            appended
        }
        MergeMode::Append => {
            let existing = state.take_records();
            let before = existing.len();
            let seen = std::mem::take(&mut state.seen);
            let (records, seen) = merge(existing, seen, &state.deleted, batch.records);
            let appended = records.len() - before;
            state.records = Arc::new(records);
            state.seen = seen;
            appended
        }
    };

    debug!(
        request = %ticket.id,
        page = %ticket.page,
        mode = ?ticket.mode,
        appended,
        total = state.records.len(),
        "Applied page"
    );
    CompletionOutcome::Applied { appended }
}

#[cfg(test)]
#[path = "completion_handler_tests.rs"]
mod tests;
