//! Directory-level error types.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    // ------ Client errors ------

    /// Client input violated a constraint; the message names it.
    #[error("{0}")]
    Invalid(String),

    /// List parameters were rejected (unknown `sort_by`).
    #[error(transparent)]
    Listing(#[from] listing::ListError),

    /// A single-record lookup matched no row.
    #[error("{0} not found")]
    NotFound(&'static str),

    // ------ Store errors ------

    /// Query, exec or row decode failure.
    #[error("database error: {0}")]
    Database(#[source] BoxError),
}

impl DirectoryError {
    /// Map a repository error, turning `NotFound` into a 404 for `entity`.
    pub(crate) fn from_db(entity: &'static str, err: db::DbError) -> Self {
        match err {
            db::DbError::NotFound => Self::NotFound(entity),
            other => Self::Database(Box::new(other)),
        }
    }
}

impl From<db::DbError> for DirectoryError {
    fn from(err: db::DbError) -> Self {
        Self::Database(Box::new(err))
    }
}
