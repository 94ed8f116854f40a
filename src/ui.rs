//! Ratatui front-end. The screen is a single form (title, author, ID) above a
//! scrollable list of every book in the store, with a status footer. Actions
//! go through [`crate::actions`] so the UI never mutates the store directly.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
