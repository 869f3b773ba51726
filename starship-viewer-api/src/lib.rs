//! # starship-viewer-api
//!
//! Fetch client for the SWAPI `starships` collection.
//!
//! One async operation, one outcome: [`StarshipClient::fetch_starships`]
//! performs a single GET against a base URL fixed at construction and
//! resolves with either the decoded record list or an [`ApiError`]. The
//! crate knows nothing about rendering; marshalling results onto a UI
//! context is entirely the caller's concern.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use starship_viewer_api::StarshipClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StarshipClient::default();
//!     let ships = client.fetch_starships().await?;
//!     for ship in &ships {
//!         println!("{}: {}", ship.name, ship.model);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError) with three
//! failure modes, none retried automatically:
//!
//! - [`ApiError::Network`] — transport failure, description passed through
//! - [`ApiError::Decode`] — body did not match the expected JSON shape
//! - [`ApiError::EmptyBody`] — transport succeeded with no payload

mod client;
mod error;
mod types;

pub use client::{StarshipClient, SWAPI_BASE};
pub use error::{ApiError, Result};
pub use types::{Starship, StarshipPage};
