//! `directory` crate — staff directory records and the operations over them.
//!
//! Sits between the HTTP layer and the `db` crate: validates client input,
//! drives the listing core for paged employee queries, and materializes
//! nullable database rows into the flat records served as JSON.

pub mod models;
pub mod error;
pub mod materialize;
pub mod employees;
pub mod lookups;

pub use models::{
    Department, District, Employee, EmployeeInput, Geography, Position, Province, SubDistrict,
};
pub use error::DirectoryError;

#[cfg(test)]
mod service_tests;
