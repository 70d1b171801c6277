//! egui interface for scrawl: toolbar, draggable note field, shortcuts.

pub mod app;
mod field;
mod fonts;

pub use app::{App, StartupArgs};
