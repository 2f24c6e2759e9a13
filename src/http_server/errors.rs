//! # HTTP API Errors
//!
//! Maps dataset and query errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::StoreError;
use crate::executor::QueryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Upload request has no `file` part
    #[error("No file part in the request")]
    MissingFilePart,

    /// Upload `file` part has an empty file name
    #[error("No file selected for uploading")]
    NoFileSelected,

    /// Body could not be read as multipart
    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),

    /// Uploaded file failed decoding or validation
    #[error("Failed to process CSV file: {0}")]
    Upload(#[from] StoreError),

    /// Query rejected
    #[error("{0}")]
    Query(#[from] QueryError),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFilePart
            | ApiError::NoFileSelected
            | ApiError::InvalidMultipart(_)
            | ApiError::Upload(_)
            | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
