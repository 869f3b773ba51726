//! Model layer: application state
//!
//! The single source of truth. Pure data structures only; all mutation goes
//! through the update layer, and the view layer only reads.

mod app;
mod page;
pub mod state;

pub use app::App;
pub use page::Page;
pub use state::{Modal, ModalState, ShipsState};
