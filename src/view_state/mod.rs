//! View-state layer - projection of records into display cards
//!
//! Cards are rebuilt from every published snapshot; they hold the formatted
//! strings the widgets render and compare by record identity.

pub mod user_card;

pub use user_card::{project, UserCard};
