//! Starship list state

use starship_viewer_api::Starship;

/// List page state: the most recently fetched list plus fetch bookkeeping.
///
/// Two logical states: Idle (`loading == false`, showing the last successful
/// list, possibly empty) and Loading (a fetch is in flight). `generation`
/// identifies the most recent fetch; outcomes tagged with an older value are
/// stale and must be discarded.
#[derive(Debug, Default)]
pub struct ShipsState {
    /// Most recently fetched starship list.
    pub ships: Vec<Starship>,
    /// Index of the selected row.
    pub selected: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Generation of the most recently issued fetch.
    pub generation: u64,
}

impl ShipsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new fetch as started and returns its generation tag.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Selects the previous row.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Selects the next row.
    pub fn select_next(&mut self) {
        if !self.ships.is_empty() && self.selected < self.ships.len() - 1 {
            self.selected += 1;
        }
    }

    /// Selects the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Selects the last row.
    pub fn select_last(&mut self) {
        if !self.ships.is_empty() {
            self.selected = self.ships.len() - 1;
        }
    }

    /// The currently selected starship, if any.
    pub fn selected_ship(&self) -> Option<&Starship> {
        self.ships.get(self.selected)
    }

    /// Replaces the whole list after a successful fetch.
    ///
    /// Resets the selection and leaves Loading.
    pub fn set_ships(&mut self, ships: Vec<Starship>) {
        self.ships = ships;
        self.selected = 0;
        self.loading = false;
    }
}
