//! Listing-level error type.

use thiserror::Error;

/// Errors produced while validating list parameters.
///
/// Out-of-range `page`, `page_size` and `sort_order` values are clamped to
/// their defaults and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// `sort_by` named a column outside the entity's allow-list.
    #[error("invalid sort_by field: '{0}'")]
    UnknownSortField(String),
}
