//! Trigger coordinator.
//!
//! A single actor task owns the [`PaginationState`]. Commands from handles
//! and completions from fetch tasks are serialised through one
//! `tokio::select!` loop into the pure handlers, and every observable change
//! is published as a [`Snapshot`] on a `watch` channel.
//!
//! ```text
//! handle ──cmd──▶ actor ──handle_trigger──▶ ticket ──spawn──▶ fetch task
//!                   ▲                                            │
//!                   └──────────── (ticket, result) ◀─────────────┘
//! ```

use crate::model::{Category, FetchError, ListStyle, UserId};
use crate::source::{PageBatch, RecordFetch};
use crate::state::{
    handle_completion, handle_trigger, FetchTicket, PaginationState, Snapshot, Trigger,
    TriggerOutcome,
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, info_span, Instrument};

/// Errors returned by [`CoordinatorHandle`] commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// The actor task has stopped; no command can be delivered.
    #[error("coordinator has shut down")]
    Closed,
}

/// Initial filter and style of a new coordinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinatorOptions {
    /// Category of the first fetch.
    pub filter: Category,
    /// Initial list layout.
    pub style: ListStyle,
}

enum Command {
    Trigger(Trigger),
    Delete {
        ids: HashSet<UserId>,
        ack: oneshot::Sender<usize>,
    },
}

type Completion = (FetchTicket, Result<PageBatch, FetchError>);

/// Cloneable client of the coordinator actor.
///
/// Dropping every handle stops the actor. Outstanding fetches still run to
/// completion but their results go nowhere.
#[derive(Clone)]
pub struct CoordinatorHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl CoordinatorHandle {
    fn send(&self, command: Command) -> Result<(), CoordinatorError> {
        self.commands
            .send(command)
            .map_err(|_| CoordinatorError::Closed)
    }

    fn trigger(&self, trigger: Trigger) -> Result<(), CoordinatorError> {
        self.send(Command::Trigger(trigger))
    }

    /// Reload page 1 of the active filter. Supersedes outstanding fetches.
    pub fn refresh(&self) -> Result<(), CoordinatorError> {
        self.trigger(Trigger::Refresh)
    }

    /// Request the page after the cursor.
    pub fn load_more(&self) -> Result<(), CoordinatorError> {
        self.trigger(Trigger::LoadMore)
    }

    /// Switch filter, clearing the list. Supersedes outstanding fetches.
    pub fn select_filter(&self, filter: Category) -> Result<(), CoordinatorError> {
        self.trigger(Trigger::SelectFilter(filter))
    }

    /// Set the list layout.
    pub fn set_style(&self, style: ListStyle) -> Result<(), CoordinatorError> {
        self.trigger(Trigger::SetStyle(style))
    }

    /// Switch between single and double column.
    pub fn toggle_style(&self) -> Result<(), CoordinatorError> {
        self.trigger(Trigger::ToggleStyle)
    }

    /// Hide `ids` for the rest of the process and wait for the actor to
    /// apply it. Returns how many records left the list.
    pub async fn delete(&self, ids: HashSet<UserId>) -> Result<usize, CoordinatorError> {
        let (ack, acked) = oneshot::channel();
        self.send(Command::Delete { ids, ack })?;
        acked.await.map_err(|_| CoordinatorError::Closed)
    }

    /// [`delete`](Self::delete) for callers outside the runtime.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn delete_blocking(&self, ids: HashSet<UserId>) -> Result<usize, CoordinatorError> {
        let (ack, acked) = oneshot::channel();
        self.send(Command::Delete { ids, ack })?;
        acked.blocking_recv().map_err(|_| CoordinatorError::Closed)
    }

    /// New receiver of published snapshots. Starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }
}

/// Start the actor and fire the initial load.
///
/// The first snapshot a subscriber sees already has the initial fetch
/// outstanding.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn spawn(source: Arc<dyn RecordFetch>, options: CoordinatorOptions) -> CoordinatorHandle {
    let state = PaginationState::new(options.filter, options.style);
    let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (completion_tx, completion_rx) = mpsc::unbounded_channel();

    let mut actor = Coordinator {
        published_revision: state.revision(),
        state,
        source,
        completion_tx,
        snapshots: snapshot_tx,
    };
    info!(filter = %options.filter, "Coordinator started");
    // Before any handle exists, so no observer sees the idle empty store
    actor.apply_trigger(Trigger::InitialLoad);
    tokio::spawn(actor.run(command_rx, completion_rx));

    CoordinatorHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    }
}

struct Coordinator {
    state: PaginationState,
    source: Arc<dyn RecordFetch>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    snapshots: watch::Sender<Snapshot>,
    published_revision: u64,
}

impl Coordinator {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut completions: mpsc::UnboundedReceiver<Completion>,
    ) {
        loop {
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(command) => self.apply_command(command),
                    None => break,
                },
                Some((ticket, result)) = completions.recv() => {
                    let outcome = handle_completion(&mut self.state, ticket, result);
                    debug!(request = %ticket.id, ?outcome, "Completion handled");
                    self.publish();
                }
            }
        }

        info!("Coordinator stopped");
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::Trigger(trigger) => {
                self.apply_trigger(trigger);
            }
            Command::Delete { ids, ack } => {
                let removed = match self.apply_trigger(Trigger::Delete(ids)) {
                    TriggerOutcome::Deleted { removed } => removed,
                    _ => 0,
                };
                // Caller may have given up waiting
                let _ = ack.send(removed);
            }
        }
    }

    fn apply_trigger(&mut self, trigger: Trigger) -> TriggerOutcome {
        let outcome = handle_trigger(&mut self.state, trigger);
        if let TriggerOutcome::Fetch(ticket) = outcome {
            self.start_fetch(ticket);
        }
        self.publish();
        outcome
    }

    fn start_fetch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let completions = self.completion_tx.clone();
        let span = info_span!(
            "fetch",
            request = %ticket.id,
            page = %ticket.page,
            filter = %ticket.filter,
            mode = ?ticket.mode,
        );

        tokio::spawn(
            async move {
                debug!("Fetch started");
                let result = source.fetch(ticket.page, ticket.filter).await;
                debug!(ok = result.is_ok(), "Fetch finished");
                // Actor gone means nobody cares about the result
                let _ = completions.send((ticket, result));
            }
            .instrument(span),
        );
    }

    /// Publish a snapshot if anything observable changed since the last one.
    fn publish(&mut self) {
        let revision = self.state.revision();
        if revision == self.published_revision {
            return;
        }
        self.published_revision = revision;
        self.snapshots.send_replace(self.state.snapshot());
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
