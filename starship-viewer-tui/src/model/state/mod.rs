//! Page data state containers

mod modal;
mod ships;

pub use modal::{Modal, ModalState};
pub use ships::ShipsState;
