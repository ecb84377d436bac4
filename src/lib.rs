//! Random User Viewer (ruv)
//!
//! TUI application for browsing paginated, filterable random user records.
//!
//! The core is a pagination store driven by pure handlers
//! ([`state::handle_trigger`], [`state::handle_completion`]) and owned by a
//! single actor task ([`coordinator`]). The terminal shell ([`view`]) reads
//! published snapshots and sends commands back through a handle.

pub mod config;
pub mod coordinator;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
