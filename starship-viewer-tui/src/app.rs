//! Application main loop

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{FetchOutcome, ShipService};
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the application main loop.
///
/// Each iteration: render the UI, apply any completed fetches delivered on
/// the backend channel, then poll for an input event (100 ms timeout) and
/// feed it through the message/update layers. An initial fetch is kicked
/// off before the first frame.
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &ShipService,
    mut outcomes: UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    // Load the list on startup
    let generation = app.ships.begin_fetch();
    service.spawn_fetch(generation);

    loop {
        // 1. Render the UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check for exit
        if app.should_quit {
            break;
        }

        // 3. Apply completed fetches (stale generations are dropped inside)
        while let Ok(outcome) = outcomes.try_recv() {
            update::apply_fetch_outcome(app, outcome);
        }

        // 4. Poll input (100 ms timeout keeps the loop responsive to fetches)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. Translate the event into a message and update the state
            let msg = event::handle_event(event, app);
            update::update(app, msg, service);
        }
    }

    Ok(())
}
