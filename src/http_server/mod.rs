//! # HTTP Server Module
//!
//! Request-handling boundary around the dataset store and query executor.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome text
//! - `POST /upload` - Replace the dataset with a multipart CSV `file`
//! - `GET /sales` - Filtered, paginated aggregation
//! - `GET /health` - Health check
//! - `GET /metrics` - Counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod sales_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use sales_routes::{SalesState, UploadResponse, UPLOAD_SUCCESS_MESSAGE};
pub use server::HttpServer;
