use thiserror::Error;

/// Errors surfaced by [`Tree`](crate::Tree) operations.
///
/// Only removal reports failure. Lookups answer absence with `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key asked to be removed is not stored in the tree.
    #[error("key not found in tree")]
    NotFound,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
