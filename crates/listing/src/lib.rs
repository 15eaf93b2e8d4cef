//! `listing` crate — the generic list-query core.
//!
//! Turns untrusted pagination/sort/search parameters into a safe pair of SQL
//! statements (count + page) and wraps the fetched rows in a [`ListResult`]
//! envelope.  Nothing here talks to a database: statements are executed
//! through the [`ListStore`] trait, which the `db` crate implements for
//! Postgres and [`mock::MockStore`] implements in memory.

pub mod entity;
pub mod error;
pub mod params;
pub mod query;
pub mod page;
pub mod store;
pub mod mock;

pub use entity::EntityListing;
pub use error::ListError;
pub use params::{ListParams, ListRequest, SortOrder};
pub use query::{assemble, BindValue, ListQuery, Statement};
pub use page::{total_pages, ListResult};
pub use store::{run_listing, ListStore};

#[cfg(test)]
mod listing_tests;
