//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod category;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod user;

// Re-export for convenience
pub use category::{Category, Gender, ListStyle, UnknownVariant};
pub use error::FetchError;
pub use identifiers::{InvalidPageNumber, InvalidUserId, PageNumber, UserId};
pub use key_action::KeyAction;
pub use user::{Location, Login, Name, Picture, Street, User};
