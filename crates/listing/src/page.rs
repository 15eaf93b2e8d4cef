//! The paginated response envelope.

use serde::Serialize;

use crate::ListRequest;

/// One page of results plus pagination metadata.
///
/// `page` and `page_size` echo the validated request, not the raw client
/// input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: i64,
}

impl<T> ListResult<T> {
    pub fn new(data: Vec<T>, total: i64, request: &ListRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total, request.page_size),
        }
    }
}

/// Ceiling division of `total` by `page_size`; zero rows means zero pages.
pub fn total_pages(total: i64, page_size: u32) -> i64 {
    if total <= 0 || page_size == 0 {
        return 0;
    }
    let size = i64::from(page_size);
    (total + size - 1) / size
}
