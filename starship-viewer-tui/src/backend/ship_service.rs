//! Fetch service bridging the API client and the render loop

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use starship_viewer_api::{ApiError, Starship, StarshipClient};

/// Result of one fetch, tagged with the generation that started it.
///
/// The generation token resolves the rapid-refresh race: a refresh issued
/// while a fetch is still in flight bumps the generation, and the update
/// layer discards any outcome whose tag no longer matches. The older
/// request can therefore never overwrite the newer result.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Starship>, ApiError>,
}

/// Owns the fetch client and the sending half of the outcome channel.
pub struct ShipService {
    client: Arc<StarshipClient>,
    tx: UnboundedSender<FetchOutcome>,
}

impl ShipService {
    /// Creates the service and the receiver the main loop drains.
    pub fn new(client: StarshipClient) -> (Self, UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client: Arc::new(client),
                tx,
            },
            rx,
        )
    }

    /// Starts one fetch on a tokio task.
    ///
    /// Returns immediately; the outcome arrives on the channel exactly once.
    pub fn spawn_fetch(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            log::debug!("Fetch generation {generation} started");
            let result = client.fetch_starships().await;
            // A closed channel means the app is shutting down
            let _ = tx.send(FetchOutcome { generation, result });
        });
    }
}
