//! Starship Viewer TUI
//!
//! Elm Architecture (TEA) layout:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: async fetch service (`backend/`)
//!
//! The main loop draws the UI, drains completed fetches from the backend
//! channel, polls for input, and feeds the resulting messages to the update
//! layer. Fetches run on tokio tasks; all state mutation happens here, on
//! the single rendering context.

mod app;
mod backend;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use starship_viewer_api::StarshipClient;

use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. Logging before the terminal is put into raw mode
    env_logger::init();

    // 2. Load config (missing file falls back to defaults)
    let config = config::load()?;
    view::theme::set_theme_index(config.theme.index());

    // 3. Wire the fetch service
    let client = StarshipClient::new(&config.api_base);
    let (service, outcomes) = backend::ShipService::new(client);

    // 4. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 5. Create the application state
    let mut app = model::App::new();

    // 6. Run the main loop
    let result = app::run(&mut terminal, &mut app, &service, outcomes).await;

    // 7. Restore the terminal, success or not
    restore_terminal(&mut terminal)?;

    result
}
