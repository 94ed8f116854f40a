//! Core library surface for the Library Manager TUI application.
//!
//! The store and the validation actions are usable without a terminal, which
//! is how the integration tests drive them; the `bin` target wires them to the
//! Ratatui front-end.
pub mod actions;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

/// Form-level operations that validate raw text before touching the store.
pub use actions::{add_book, clear_books, delete_book, parse_id};

pub use config::{Config, OverflowPolicy};
pub use error::LibraryError;
pub use models::Book;
pub use store::BookStore;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
