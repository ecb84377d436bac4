//! List state machine (pure).
//!
//! All state transitions are pure functions testable without the runtime or
//! the TUI. The coordinator drives `handle_trigger`/`handle_completion`; the
//! view drives the browser handlers.

pub mod browser;
pub mod completion_handler;
pub mod merge;
pub mod pagination;
pub mod trigger_handler;

// Re-export for convenience
pub use browser::{
    handle_browser_action, handle_confirmation, BrowserEffect, BrowserState, Overlay, Toast,
};
pub use completion_handler::{handle_completion, CompletionOutcome};
pub use merge::merge;
pub use pagination::{PaginationState, RequestId, Snapshot};
pub use trigger_handler::{handle_trigger, FetchTicket, MergeMode, Trigger, TriggerOutcome};
