//! Backend layer: async fetch service
//!
//! Fully decoupled from the UI. Fetches run on tokio tasks and report back
//! over a channel; the main loop is the only place outcomes are applied, so
//! the service makes no assumption about any rendering context.

mod ship_service;

pub use ship_service::{FetchOutcome, ShipService};
