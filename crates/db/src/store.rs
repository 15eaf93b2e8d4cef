//! `PgStore` — runs assembled listing statements against Postgres.

use async_trait::async_trait;
use listing::{BindValue, ListStore, Statement};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::{DbError, DbPool};

/// [`ListStore`] backed by the shared pool.
///
/// Holds no state besides the pool handle; every call checks a connection
/// out independently, so the count and page statements of one listing may
/// run on different connections.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<R> ListStore<R> for PgStore
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    type Error = DbError;

    async fn count(&self, statement: &Statement) -> Result<i64, DbError> {
        let mut query = sqlx::query_scalar::<_, i64>(&statement.sql);
        for bind in &statement.binds {
            query = match bind {
                BindValue::Text(text) => query.bind(text.as_str()),
                BindValue::Int(int) => query.bind(*int),
            };
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn fetch(&self, statement: &Statement) -> Result<Vec<R>, DbError> {
        let mut query = sqlx::query_as::<_, R>(&statement.sql);
        for bind in &statement.binds {
            query = match bind {
                BindValue::Text(text) => query.bind(text.as_str()),
                BindValue::Int(int) => query.bind(*int),
            };
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}
