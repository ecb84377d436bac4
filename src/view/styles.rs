//! Shared styles for the browser screens.
//!
//! Color output honours `NO_COLOR`: when it is set every style degrades to
//! modifiers only (bold, reversed, dim), which stay legible on any terminal.

use crate::model::Gender;
use ratatui::style::{Color, Modifier, Style};

/// Category headers in overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Secondary text: email, address, hints.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Key names in help and hint lines.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Field labels in the detail overlay.
pub const FIELD_LABEL: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is present,
/// whatever its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors on unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicit setting, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether styles carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ===== BrowserStyles =====

/// Styles for list cells, tabs and notifications.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStyles {
    /// Card title line.
    pub name: Style,
    /// Card detail lines.
    pub secondary: Style,
    /// Highlighted card.
    pub cursor: Style,
    /// Card marked for deletion.
    pub marked: Style,
    /// Selected filter tab.
    pub active_tab: Style,
    /// Error toast border and title.
    pub error: Style,
    /// Loading indicator.
    pub loading: Style,
    male: Style,
    female: Style,
}

impl BrowserStyles {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                name: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                secondary: MUTED_TEXT,
                cursor: Style::new().bg(Color::DarkGray),
                marked: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
                active_tab: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                error: Style::new().fg(Color::Red),
                loading: Style::new().fg(Color::Cyan),
                male: Style::new().fg(Color::Blue),
                female: Style::new().fg(Color::Magenta),
            }
        } else {
            Self {
                name: Style::new().add_modifier(Modifier::BOLD),
                secondary: Style::new().add_modifier(Modifier::DIM),
                cursor: Style::new().add_modifier(Modifier::REVERSED),
                marked: Style::new().add_modifier(Modifier::BOLD),
                active_tab: Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                error: Style::new().add_modifier(Modifier::BOLD),
                loading: Style::new(),
                male: Style::new(),
                female: Style::new(),
            }
        }
    }

    /// Accent for the gender marker of a card.
    pub fn gender(&self, gender: Gender) -> Style {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
