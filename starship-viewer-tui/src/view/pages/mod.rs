//! Page views

pub mod detail;
pub mod ships;
