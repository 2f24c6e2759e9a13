//! salesdb - An in-memory sales dataset service
//!
//! Accepts an uploaded CSV dataset, keeps it in process memory and answers
//! filtered, paginated aggregation queries against it.

pub mod cli;
pub mod dataset;
pub mod executor;
pub mod http_server;
pub mod observability;
