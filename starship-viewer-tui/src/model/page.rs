//! Page routing state

/// Page enum: which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Starship list.
    #[default]
    Ships,
    /// Detail view for one previously selected starship.
    ShipDetail {
        /// Index into the fetched list.
        index: usize,
    },
}

impl Page {
    /// Whether this page is a detail page (Esc returns to the list).
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::ShipDetail { .. })
    }
}
