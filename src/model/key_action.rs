//! Domain-level keyboard actions independent of key bindings.

use crate::model::Category;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the cursor one row down. Default: j/↓
    CursorDown,
    /// Move the cursor one row up. Default: k/↑
    CursorUp,
    /// Jump to the first card. Default: g/Home
    CursorFirst,
    /// Jump to the last card (requests the next page). Default: G/End
    CursorLast,

    // Data triggers
    /// Reload page 1 of the active filter. Default: r
    Refresh,
    /// Request the next page explicitly. Default: m
    LoadMore,
    /// Switch to a specific filter tab. Default: 1/2/3
    SelectFilter(Category),
    /// Switch to the next filter tab. Default: ]/Tab
    NextFilter,
    /// Switch to the previous filter tab. Default: [/Shift+Tab
    PrevFilter,

    // Presentation
    /// Toggle single/double column layout. Default: v
    ToggleStyle,

    // Selection and deletion
    /// Enter or leave selection mode. Default: s
    ToggleSelectionMode,
    /// Open detail, or mark/unmark the current card in selection mode. Default: Enter
    Activate,
    /// Mark/unmark the current card in selection mode. Default: Space
    ToggleMark,
    /// Ask to delete the marked cards. Default: d
    DeleteMarked,

    // Application
    /// Close the topmost overlay. Default: Esc
    Back,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
