//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate their invariants at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Stable, globally unique identity of one user record.
///
/// Sourced from the fetch source's own unique-id field (`login.uuid`).
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidUserId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidUserId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-based page number used as the pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page. Every filter session starts here.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Smart constructor: validates the page is positive
    pub fn new(raw: u32) -> Result<Self, InvalidPageNumber> {
        if raw == 0 {
            return Err(InvalidPageNumber::Zero);
        }
        Ok(Self(raw))
    }

    /// One-based page number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Error constructing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    /// The source sent an empty identity.
    #[error("User ID cannot be empty")]
    Empty,
}

/// Error constructing a [`PageNumber`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageNumber {
    /// Pages start at 1.
    #[error("Page number must be positive")]
    Zero,
}

// ===== Tests =====
