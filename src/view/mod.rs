//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod help;
pub mod layout;
pub mod list;
pub mod status;
pub mod styles;
pub mod tabs;

pub use detail::render_detail_overlay;
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use styles::{BrowserStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::coordinator::{CoordinatorError, CoordinatorHandle};
use crate::model::FetchError;
use crate::state::{
    handle_browser_action, handle_confirmation, BrowserEffect, BrowserState, Overlay, Snapshot,
};
use constants::TICK_MILLIS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The coordinator stopped while the UI was still running
    #[error("Coordinator error: {0}")]
    Coordinator(#[from] CoordinatorError),

    /// The record source could not be constructed
    #[error("Client error: {0}")]
    Client(#[from] FetchError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    handle: CoordinatorHandle,
    snapshots: watch::Receiver<Snapshot>,
    key_bindings: KeyBindings,
    browser: BrowserState,
    styles: BrowserStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(handle: CoordinatorHandle, load_more_threshold: usize) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, handle, load_more_threshold))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input and whenever
    /// the coordinator publishes a new snapshot.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(TICK_MILLIS);

        self.sync_snapshot()?;
        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key)? {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            if self.sync_snapshot()? || dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        handle: CoordinatorHandle,
        load_more_threshold: usize,
    ) -> Self {
        let snapshots = handle.subscribe();
        Self {
            terminal,
            handle,
            snapshots,
            key_bindings: KeyBindings::default(),
            browser: BrowserState::new(load_more_threshold),
            styles: BrowserStyles::default(),
        }
    }

    /// Pull the latest snapshot into the browser if one was published since
    /// the last call. Returns whether anything changed.
    fn sync_snapshot(&mut self) -> Result<bool, TuiError> {
        let changed = self
            .snapshots
            .has_changed()
            .map_err(|_| CoordinatorError::Closed)?;
        if changed {
            let snapshot = self.snapshots.borrow_and_update().clone();
            debug!(revision = snapshot.revision, "Applying snapshot");
            self.browser.apply_snapshot(snapshot);
        }
        Ok(changed)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        // y/n answer the delete prompt; they are not bound otherwise
        if self.browser.overlay == Overlay::ConfirmDelete && self.browser.toast().is_none() {
            let answer = match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
                KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
                _ => None,
            };
            if let Some(confirmed) = answer {
                let effect = handle_confirmation(&mut self.browser, confirmed);
                return self.dispatch(effect);
            }
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return Ok(false),
        };
        debug!(?action, "Key action");
        let effect = handle_browser_action(&mut self.browser, action);
        self.dispatch(effect)
    }

    /// Forward a browser effect to the coordinator.
    ///
    /// Returns true if app should quit
    fn dispatch(&mut self, effect: BrowserEffect) -> Result<bool, TuiError> {
        match effect {
            BrowserEffect::None => {}
            BrowserEffect::Refresh => self.handle.refresh()?,
            BrowserEffect::LoadMore => self.handle.load_more()?,
            BrowserEffect::SelectFilter(filter) => self.handle.select_filter(filter)?,
            BrowserEffect::ToggleStyle => self.handle.toggle_style()?,
            BrowserEffect::Delete(ids) => {
                let requested = ids.len();
                let removed = self.handle.delete_blocking(ids)?;
                info!(requested, removed, "Deleted marked users");
                self.sync_snapshot()?;
            }
            BrowserEffect::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let browser = &self.browser;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, browser, styles))?;
        Ok(())
    }
}

/// Initialize and run the TUI application against a running coordinator
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
/// Must not be called from inside the Tokio runtime.
pub fn run(handle: CoordinatorHandle, load_more_threshold: usize) -> Result<(), TuiError> {
    let mut app = TuiApp::new(handle, load_more_threshold)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
