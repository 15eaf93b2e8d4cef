//! Persistence errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// `DATABASE_URL` or a `DB_*` setting could not be turned into connect
    /// options.
    #[error("invalid database settings: {0}")]
    InvalidSettings(#[source] sqlx::Error),

    #[error("database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A single-row statement matched nothing.
    #[error("row not found")]
    NotFound,

    #[error("schema bootstrap failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
