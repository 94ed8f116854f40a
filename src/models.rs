//! Domain model shared by the store and the TUI. `Book` stays a plain data
//! holder so the store can own it outright and the UI only ever borrows it
//! for the length of a frame.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in the library list.
pub struct Book {
    /// Caller-supplied identifier. Nothing enforces uniqueness, so two books
    /// may share an id; deletion removes the most recently added one first.
    pub id: i64,
    /// Title as typed, already clamped to the store's length bound.
    pub title: String,
    /// Author as typed, clamped the same way as `title`.
    pub author: String,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    /// Render the single-line form used by the list panel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}",
            self.id, self.title, self.author
        )
    }
}
