//! Mapping from operation errors to HTTP responses.
//!
//! Every error body is plain text. Store failures are logged here and
//! reach the client only as a generic message.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use directory::DirectoryError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Directory(DirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Directory(DirectoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Directory(DirectoryError::Invalid(_) | DirectoryError::Listing(_))
            | Self::Body(_)
            | Self::Query(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
            return (status, "internal server error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}
