//! Dedup/merge of incoming pages into the accumulated list.
//!
//! Pure function, no I/O. The coordinator calls it on every applied page.

use crate::model::{User, UserId};
use std::collections::HashSet;

/// Append the admissible records of `incoming` to `existing`.
///
/// A record is kept iff its identity is in neither `seen` nor `deleted`.
/// Identities kept earlier in the same batch count as seen, so a batch that
/// repeats a record contributes it once.
///
/// `existing` is never reordered or shrunk: the result is
/// `existing ++ kept` and `seen ∪ ids(kept)`.
///
/// # Arguments
/// * `existing` - Accumulated list for the current filter session
/// * `seen` - Identities already present in `existing` (or otherwise suppressed)
/// * `deleted` - Tombstones that must never reappear
/// * `incoming` - Page returned by the source, in server order
pub fn merge(
    mut existing: Vec<User>,
    mut seen: HashSet<UserId>,
    deleted: &HashSet<UserId>,
    incoming: Vec<User>,
) -> (Vec<User>, HashSet<UserId>) {
    existing.reserve(incoming.len());

    for user in incoming {
        if deleted.contains(user.id()) {
            continue;
        }
        // insert() is false for an identity already seen
        if seen.insert(user.id().clone()) {
            existing.push(user);
        }
    }

    (existing, seen)
}
