//! Boundary between raw form text and the store. Everything the UI submits
//! passes through here so the validation rules live in one place and can be
//! tested without a terminal.

use tracing::{info, warn};

use crate::config::OverflowPolicy;
use crate::error::LibraryError;
use crate::models::Book;
use crate::store::BookStore;

/// Parse an id the way C's `atoi` does: skip leading `isspace` characters
/// (ASCII only, vertical tab included), accept one optional sign, then read
/// digits until the first non-digit. Text without digits, and values that
/// overflow `i64`, become 0.
pub fn parse_id(text: &str) -> i64 {
    let trimmed = text.trim_start_matches(|ch: char| ch.is_ascii_whitespace() || ch == '\x0b');
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }

    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}

/// Validate the add form and insert a new book.
///
/// Ids that do not parse to a positive number are rejected without touching
/// the store. Oversize title/author text is truncated by the store or
/// rejected here, depending on `overflow`.
pub fn add_book(
    store: &mut BookStore,
    overflow: OverflowPolicy,
    id_text: &str,
    title: &str,
    author: &str,
) -> Result<Book, LibraryError> {
    let id = parse_id(id_text);
    if id <= 0 {
        warn!(input = id_text, "rejected book with invalid id");
        return Err(LibraryError::InvalidId {
            input: id_text.to_string(),
        });
    }

    if overflow == OverflowPolicy::Reject {
        let max = store.max_len();
        for (field, value) in [("Title", title), ("Author", author)] {
            if value.chars().count() > max {
                warn!(id, field, max, "rejected book with oversize field");
                return Err(LibraryError::FieldTooLong { field, max });
            }
        }
    }

    let book = store.insert(id, title, author).clone();
    info!(id, title = %book.title, author = %book.author, "added book");
    Ok(book)
}

/// Delete the most recently added book whose id matches `id_text`.
///
/// Non-numeric text parses to 0 and so never matches a stored book.
pub fn delete_book(store: &mut BookStore, id_text: &str) -> Result<Book, LibraryError> {
    let id = parse_id(id_text);
    match store.remove_by_id(id) {
        Some(book) => {
            info!(id, title = %book.title, "deleted book");
            Ok(book)
        }
        None => {
            info!(id, "no book to delete");
            Err(LibraryError::NotFound(id))
        }
    }
}

/// Drop every book, returning how many were removed.
pub fn clear_books(store: &mut BookStore) -> usize {
    let removed = store.len();
    store.clear();
    info!(removed, "cleared book list");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_follows_atoi() {
        assert_eq!(parse_id("42"), 42);
        assert_eq!(parse_id("  42abc"), 42);
        assert_eq!(parse_id("\t+7"), 7);
        assert_eq!(parse_id("-3"), -3);
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("-"), 0);
        assert_eq!(parse_id("4 2"), 4);
        assert_eq!(parse_id("0012"), 12);
    }

    #[test]
    fn parse_id_skips_only_c_whitespace() {
        assert_eq!(parse_id("\x0b7"), 7);
        assert_eq!(parse_id("\x0c\r\n 5"), 5);
        assert_eq!(parse_id("\u{a0}42"), 0);
        assert_eq!(parse_id("\u{2003}42"), 0);
    }

    #[test]
    fn parse_id_overflow_is_zero() {
        assert_eq!(parse_id("99999999999999999999"), 0);
        assert_eq!(parse_id("9223372036854775807"), i64::MAX);
        assert_eq!(parse_id("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn add_rejects_non_positive_ids() {
        let mut store = BookStore::new();
        for text in ["0", "-5", "abc", "", "  "] {
            let err = add_book(&mut store, OverflowPolicy::Truncate, text, "T", "A").unwrap_err();
            assert!(matches!(err, LibraryError::InvalidId { .. }), "{text:?}");
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_inserts_at_front() {
        let mut store = BookStore::new();
        add_book(&mut store, OverflowPolicy::Truncate, "1", "First", "A").unwrap();
        let book = add_book(&mut store, OverflowPolicy::Truncate, "2", "Second", "B").unwrap();
        assert_eq!(book, Book::new(2, "Second", "B"));
        assert_eq!(store.enumerate().next(), Some(&book));
    }

    #[test]
    fn add_truncates_by_default() {
        let mut store = BookStore::new();
        let long = "x".repeat(150);
        let book = add_book(&mut store, OverflowPolicy::Truncate, "1", &long, "A").unwrap();
        assert_eq!(book.title.chars().count(), 99);
    }

    #[test]
    fn add_rejects_oversize_when_configured() {
        let mut store = BookStore::with_max_len(10);
        let err = add_book(
            &mut store,
            OverflowPolicy::Reject,
            "1",
            "short",
            "a very long author name",
        )
        .unwrap_err();
        assert_eq!(
            err,
            LibraryError::FieldTooLong {
                field: "Author",
                max: 10
            }
        );
        assert!(store.is_empty());

        add_book(&mut store, OverflowPolicy::Reject, "1", "exactly10!", "ok").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_reports_missing_ids() {
        let mut store = BookStore::new();
        store.insert(3, "T", "A");
        assert_eq!(delete_book(&mut store, "4"), Err(LibraryError::NotFound(4)));
        assert_eq!(delete_book(&mut store, "junk"), Err(LibraryError::NotFound(0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_newest_duplicate() {
        let mut store = BookStore::new();
        store.insert(7, "A", "");
        store.insert(7, "B", "");
        let removed = delete_book(&mut store, " 7").unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(store.find(7).map(|book| book.title.as_str()), Some("A"));
    }

    #[test]
    fn clear_reports_count() {
        let mut store = BookStore::new();
        store.insert(1, "a", "");
        store.insert(2, "b", "");
        assert_eq!(clear_books(&mut store), 2);
        assert!(store.is_empty());
        assert_eq!(clear_books(&mut store), 0);
    }
}
