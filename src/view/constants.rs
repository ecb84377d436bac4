//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the filter tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines per card in the list: name, email, address.
pub const CARD_HEIGHT: u16 = 3;

/// Blank lines between two card rows.
pub const CARD_GAP: u16 = 1;

/// Height of the error toast including borders.
pub const TOAST_HEIGHT: u16 = 4;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Poll interval of the event loop.
///
/// Snapshot changes are picked up at least this often while no key is pressed.
pub const TICK_MILLIS: u64 = 100;
