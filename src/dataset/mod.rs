//! Dataset subsystem
//!
//! Holds the currently uploaded sales dataset in process memory.
//!
//! # Load Flow
//!
//! 1. Decode uploaded bytes into a header and raw string rows
//! 2. Validate every row into a typed [`Record`]
//! 3. Swap the finished [`Dataset`] into the [`DatasetStore`]
//!
//! A load either succeeds for every row or leaves the store untouched.

mod decoder;
mod errors;
mod record;
mod store;

pub use decoder::{decode_csv, DecodedTable};
pub use errors::{StoreError, StoreResult};
pub use record::{
    format_date, parse_date, Dataset, RawRow, Record, REQUIRED_COLUMNS, SALES_COLUMN,
};
pub use store::DatasetStore;
