//! Modal state

/// Modal dialogs; each variant carries everything its rendering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// One-shot error notification; the list underneath stays untouched.
    Error { title: String, message: String },
    /// Keyboard shortcut overview.
    Help,
}

/// Container for the active modal.
#[derive(Debug, Default)]
pub struct ModalState {
    /// `None` means no modal is showing.
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
