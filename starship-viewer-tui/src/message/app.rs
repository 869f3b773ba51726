//! Top-level application messages

use super::ContentMessage;

/// Main message enum consumed by the update layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// Exit the application.
    Quit,
    /// Start a new fetch of the starship list.
    Refresh,
    /// Content-area sub-message (list navigation, confirm).
    Content(ContentMessage),
    /// Close the active modal, or leave the detail page.
    GoBack,
    /// Open the help modal.
    ShowHelp,
    /// Close the active modal.
    CloseModal,
    /// No-op, used instead of wrapping everything in `Option`.
    Noop,
}
