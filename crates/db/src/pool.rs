//! Postgres connection pool.

pub use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::{PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Discrete connection settings, as supplied through `DB_*` variables.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// libpq-style mode: `disable`, `prefer`, `require`, `verify-full`, ...
    pub ssl_mode: String,
}

impl DbSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        let ssl_mode: PgSslMode = self.ssl_mode.parse().map_err(DbError::InvalidSettings)?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }
}

/// Parse a `postgres://` URL into connect options.
pub fn options_from_url(database_url: &str) -> Result<PgConnectOptions, DbError> {
    database_url.parse().map_err(DbError::InvalidSettings)
}

/// Create a new connection pool and verify it with one connection.
///
/// `max_connections` controls the pool ceiling.
pub async fn create_pool(options: PgConnectOptions, max_connections: u32) -> Result<DbPool, DbError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Run the embedded table bootstrap located in `./migrations` (relative to
/// the workspace root at build time).
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
