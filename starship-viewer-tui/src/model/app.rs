//! Main application state

use super::{ModalState, Page, ShipsState};

/// Application state read by the view layer and mutated by the update layer.
pub struct App {
    /// Exit flag checked by the main loop.
    pub should_quit: bool,

    /// Current page.
    pub current_page: Page,

    /// Status bar message.
    pub status_message: Option<String>,

    /// Starship list state.
    pub ships: ShipsState,

    /// Modal state.
    pub modal: ModalState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            current_page: Page::Ships,
            status_message: None,
            ships: ShipsState::new(),
            modal: ModalState::new(),
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clears the status bar message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
