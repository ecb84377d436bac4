//! Pagination state store.
//!
//! `PaginationState` is the single source of truth for the browsed list.
//! Readers get values through accessors or an immutable [`Snapshot`];
//! mutation is reserved to `handle_trigger` and `handle_completion`.

use crate::model::{Category, FetchError, ListStyle, PageNumber, User, UserId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

// ===== RequestId =====

/// Identity of one issued fetch. Unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== PaginationState =====

/// Paginated list state. Pure data, no I/O.
///
/// # Invariants
///
/// - No two elements of `records` share an identity.
/// - No element of `records` has an identity in `deleted`.
/// - `deleted` only grows; it survives refresh and filter changes.
/// - `pending` holds exactly the requests whose completions may still apply.
///   Latest-wins triggers empty it and bump `generation`.
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Page most recently requested for the current filter session.
    pub(super) cursor: PageNumber,

    /// Active category filter.
    pub(super) filter: Category,

    /// Accumulated list. Shared with published snapshots, cloned on write.
    pub(super) records: Arc<Vec<User>>,

    /// Identities admitted during the current filter session.
    pub(super) seen: HashSet<UserId>,

    /// Tombstones. Never cleared.
    pub(super) deleted: HashSet<UserId>,

    /// Outstanding, non-superseded requests.
    pub(super) pending: HashSet<RequestId>,

    /// Bumped by every latest-wins trigger.
    pub(super) generation: u64,

    pub(super) next_request: u64,

    /// Most recent surfaced failure. Kept until the next one.
    pub(super) last_error: Option<FetchError>,

    /// Incremented once per surfaced failure so consumers can tell two
    /// identical errors apart.
    pub(super) error_serial: u64,

    pub(super) style: ListStyle,

    /// Incremented on every observable mutation.
    pub(super) revision: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(Category::default(), ListStyle::default())
    }
}

impl PaginationState {
    /// Empty store for the given filter and presentation style.
    pub fn new(filter: Category, style: ListStyle) -> Self {
        Self {
            cursor: PageNumber::FIRST,
            filter,
            records: Arc::new(Vec::new()),
            seen: HashSet::new(),
            deleted: HashSet::new(),
            pending: HashSet::new(),
            generation: 0,
            next_request: 0,
            last_error: None,
            error_serial: 0,
            style,
            revision: 0,
        }
    }

    /// Last page requested for the active filter.
    pub fn cursor(&self) -> PageNumber {
        self.cursor
    }

    /// Active filter.
    pub fn filter(&self) -> Category {
        self.filter
    }

    /// Accumulated records in display order.
    pub fn records(&self) -> &[User] {
        &self.records
    }

    /// Identities listed in this filter session.
    pub fn seen(&self) -> &HashSet<UserId> {
        &self.seen
    }

    /// Tombstoned identities. Never cleared.
    pub fn deleted(&self) -> &HashSet<UserId> {
        &self.deleted
    }

    /// Bumped by every latest-wins trigger.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Most recent fetch failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Count of failures so far.
    pub fn error_serial(&self) -> u64 {
        self.error_serial
    }

    /// List layout.
    pub fn style(&self) -> ListStyle {
        self.style
    }

    /// Bumped on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True while at least one non-superseded request is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of outstanding, non-superseded requests.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is still awaited.
    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains(&id)
    }

    /// Immutable view for observers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: Arc::clone(&self.records),
            loading: self.is_loading(),
            last_error: self.last_error.clone(),
            error_serial: self.error_serial,
            style: self.style,
            filter: self.filter,
            cursor: self.cursor,
            revision: self.revision,
        }
    }

    // ===== Mutation helpers for the handlers =====

    /// Allocate a request id and mark it outstanding.
    pub(super) fn issue_request(&mut self) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.pending.insert(id);
        id
    }

    /// Start a new latest-wins generation. Every outstanding request is
    /// superseded.
    pub(super) fn supersede_outstanding(&mut self) {
        self.generation += 1;
        self.pending.clear();
    }

    /// Copy-on-write access to the list.
    pub(super) fn records_mut(&mut self) -> &mut Vec<User> {
        Arc::make_mut(&mut self.records)
    }

    pub(super) fn take_records(&mut self) -> Vec<User> {
        std::mem::take(self.records_mut())
    }

    pub(super) fn touch(&mut self) {
        self.revision += 1;
    }
}

// ===== Snapshot =====

/// Read-only view of the store published to observers.
///
/// `records` is shared with the store until the next mutation, so cloning
/// a snapshot is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Visible records.
    pub records: Arc<Vec<User>>,
    /// A fetch is outstanding.
    pub loading: bool,
    /// Most recent failure.
    pub last_error: Option<FetchError>,
    /// Changes on every new failure.
    pub error_serial: u64,
    /// List layout.
    pub style: ListStyle,
    /// Active filter.
    pub filter: Category,
    /// Last page requested.
    pub cursor: PageNumber,
    /// Changes on every observable change.
    pub revision: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        PaginationState::default().snapshot()
    }
}

impl Snapshot {
    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No records visible.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
