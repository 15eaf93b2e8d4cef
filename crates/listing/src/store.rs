//! The `ListStore` trait — the only thing the listing core needs from a database.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{assemble, EntityListing, ListRequest, ListResult, Statement};

/// Executes assembled statements.
///
/// Implemented for Postgres by the `db` crate and in memory by
/// [`crate::mock::MockStore`].
#[async_trait]
pub trait ListStore<R: Send>: Send + Sync {
    type Error: Send;

    /// Run a `SELECT COUNT(*)` statement.
    async fn count(&self, statement: &Statement) -> Result<i64, Self::Error>;

    /// Run a page statement and decode every row.
    ///
    /// A decode failure on any row must fail the whole call.
    async fn fetch(&self, statement: &Statement) -> Result<Vec<R>, Self::Error>;
}

/// Count, fetch and materialize one page for `entity`.
///
/// The count runs first; if it fails the page statement is never issued.
/// The two statements are separate round trips with no shared snapshot, so
/// under concurrent writes `total` may disagree with what `data` holds.
#[instrument(skip_all, fields(table = entity.table, page = request.page, page_size = request.page_size))]
pub async fn run_listing<S, R, T>(
    store: &S,
    entity: &EntityListing,
    request: &ListRequest,
) -> Result<ListResult<T>, S::Error>
where
    S: ListStore<R>,
    R: Send,
    T: From<R>,
{
    let query = assemble(entity, request);

    let total = store.count(&query.count).await?;
    let rows = store.fetch(&query.page).await?;
    debug!(total, returned = rows.len(), "listing fetched");

    let data = rows.into_iter().map(T::from).collect();
    Ok(ListResult::new(data, total, request))
}
