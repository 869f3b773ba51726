//! Update layer: state transitions
//!
//! The only place that mutates `App`. Consumes messages from the event
//! layer and fetch outcomes from the backend channel.

mod content;

use crate::backend::{FetchOutcome, ShipService};
use crate::message::AppMessage;
use crate::model::{App, Page};

/// Handles one application message.
pub fn update(app: &mut App, msg: AppMessage, service: &ShipService) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Refresh => {
            // A refresh while loading supersedes the in-flight fetch: the
            // new generation orphans the old one.
            let generation = app.ships.begin_fetch();
            service.spawn_fetch(generation);
            app.set_status("Refreshing...");
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.current_page.is_detail_page() {
                app.current_page = Page::Ships;
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::Noop => {}
    }
}

/// Applies one completed fetch.
///
/// Stale generations are dropped without touching any state. A matching
/// success replaces the whole list; a matching failure opens the error
/// modal and leaves the previously displayed list untouched. Either way
/// the list page returns to Idle.
pub fn apply_fetch_outcome(app: &mut App, outcome: FetchOutcome) {
    if outcome.generation != app.ships.generation {
        log::debug!(
            "Dropping stale fetch outcome (generation {}, current {})",
            outcome.generation,
            app.ships.generation
        );
        return;
    }

    app.ships.loading = false;

    match outcome.result {
        Ok(ships) => {
            let count = ships.len();
            app.ships.set_ships(ships);
            // The indexed record may no longer exist; fall back to the list
            if app.current_page.is_detail_page() {
                app.current_page = Page::Ships;
            }
            app.set_status(format!("Loaded {count} starship(s)"));
        }
        Err(e) => {
            log::warn!("Fetch failed: {e}");
            app.modal.show_error("Error", e.to_string());
            app.clear_status();
        }
    }
}
