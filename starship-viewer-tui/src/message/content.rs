//! Content-area sub-messages

/// Messages for the content area (list navigation and selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the detail page for the selected row.
    Confirm,
}
