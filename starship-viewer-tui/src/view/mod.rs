//! View layer: UI rendering
//!
//! Reads the model, never mutates it.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
