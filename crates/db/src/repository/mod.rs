//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic, no output formatting — pure SQL.

pub mod employees;
pub mod departments;
pub mod locations;
