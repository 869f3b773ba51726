//! Message layer: the bridge between Event and Update
//!
//! Every user action is expressed as a message; the update layer consumes
//! messages and is the only place application state changes.

mod app;
mod content;

pub use app::AppMessage;
pub use content::ContentMessage;
