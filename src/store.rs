//! In-memory book collection. The store is the single source of truth for
//! what exists; the UI never caches books across mutations and instead walks
//! `enumerate()` every time it draws.

use std::collections::vec_deque;
use std::collections::VecDeque;

use crate::models::Book;

/// Character bound applied to titles and authors when nothing else is
/// configured.
pub const DEFAULT_MAX_LEN: usize = 99;

/// Ordered collection of books, newest first.
#[derive(Debug, Clone)]
pub struct BookStore {
    books: VecDeque<Book>,
    max_len: usize,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Build an empty store whose text fields are clamped to `max_len`
    /// characters.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            books: VecDeque::new(),
            max_len,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Prepend a new book. Duplicate ids are accepted; oversize text is cut
    /// at a character boundary.
    pub fn insert(&mut self, id: i64, title: &str, author: &str) -> &Book {
        let book = Book::new(
            id,
            clamp(title, self.max_len),
            clamp(author, self.max_len),
        );
        self.books.push_front(book);
        &self.books[0]
    }

    /// Remove the first book with a matching id, returning whether anything
    /// was removed.
    pub fn delete_by_id(&mut self, id: i64) -> bool {
        self.remove_by_id(id).is_some()
    }

    /// Same as [`BookStore::delete_by_id`] but hands the removed book back.
    pub fn remove_by_id(&mut self, id: i64) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        self.books.remove(index)
    }

    /// First book with the given id in store order.
    pub fn find(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Walk every book, most recently inserted first.
    pub fn enumerate(&self) -> vec_deque::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }
}

impl<'a> IntoIterator for &'a BookStore {
    type Item = &'a Book;
    type IntoIter = vec_deque::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate()
    }
}

/// Keep at most `max_len` characters of `value`.
pub(crate) fn clamp(value: &str, max_len: usize) -> String {
    match value.char_indices().nth(max_len) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}
