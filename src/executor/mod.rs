//! Query Executor subsystem
//!
//! Answers filtered, paginated aggregation queries against the loaded dataset.
//!
//! # Execution Flow (strict order)
//!
//! 1. Obtain the active dataset
//! 2. Parse raw parameters into a [`SalesQuery`]
//! 3. Filter records by date range and region
//! 4. Aggregate over the full filtered view
//! 5. Slice the requested page from the same view
//! 6. Return the assembled [`SalesResult`]

mod aggregate;
mod errors;
mod executor;
mod filters;
mod paginate;
mod params;
mod result;

pub use aggregate::{Aggregates, Aggregator};
pub use errors::{QueryError, QueryResult};
pub use executor::{run_query, DatasetSource, QueryExecutor};
pub use filters::{FilteredView, SalesFilter};
pub use paginate::{Page, Paginator};
pub use params::{RawQueryParams, SalesQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use result::{ResultRecord, SalesResult};
