//! List-level errors (no external dependencies)

use thiserror::Error;

/// Contract violations raised by list operations.
///
/// Ordinary absence (a missing index or value) is never an error; it is
/// reported as `None` by the lookup operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of bounds for insertion into list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for list operations.
pub type ListResult<T> = Result<T, ListError>;
