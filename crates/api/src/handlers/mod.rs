//! Route handlers, one module per resource family.

pub mod employees;
pub mod lookups;
