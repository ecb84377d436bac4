//! Keyboard bindings configuration.

use crate::model::{Category, KeyAction};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Cursor movement
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::CursorUp);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::CursorUp);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::CursorFirst);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorFirst);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::CursorLast);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorLast);

        // Data triggers
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Refresh);
        bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::LoadMore);
        for (digit, category) in ['1', '2', '3'].into_iter().zip(Category::ALL) {
            bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::SelectFilter(category),
            );
        }
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextFilter);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextFilter);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevFilter);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevFilter);

        // Presentation
        bind(KeyCode::Char('v'), KeyModifiers::NONE, KeyAction::ToggleStyle);

        // Selection and deletion
        bind(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyAction::ToggleSelectionMode,
        );
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate);
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleMark);
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeleteMarked);

        // Application controls
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Back);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);

        Self { bindings }
    }
}
