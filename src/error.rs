use thiserror::Error;

/// Input problems surfaced to the user. None of these are fatal: the UI shows
/// the message in the footer and the store stays untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Invalid ID")]
    InvalidId { input: String },

    #[error("No book with ID {0}.")]
    NotFound(i64),

    #[error("{field} must be at most {max} characters.")]
    FieldTooLong { field: &'static str, max: usize },
}
