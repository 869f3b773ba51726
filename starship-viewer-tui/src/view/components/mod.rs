//! Reusable view components

pub mod modal;
pub mod statusbar;
