//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, the Postgres
//! [`listing::ListStore`] implementation, and repository functions for every
//! table in the staff-directory schema.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod store;
pub mod repository;
pub mod models;

pub use pool::{DbPool, DbSettings};
pub use error::DbError;
pub use store::PgStore;
