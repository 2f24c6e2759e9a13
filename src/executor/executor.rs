//! Query executor for sales queries
//!
//! Execution flow (strict order):
//! 1. Obtain the active dataset, failing with NotLoaded
//! 2. Parse and validate raw parameters
//! 3. Filter the dataset (order preserved)
//! 4. Aggregate over the whole filtered view
//! 5. Paginate the same filtered view
//! 6. Assemble the result
//!
//! Execution only reads the dataset.

use std::sync::Arc;

use crate::dataset::{Dataset, DatasetStore, StoreResult};

use super::aggregate::Aggregator;
use super::errors::{QueryError, QueryResult};
use super::filters::SalesFilter;
use super::paginate::Paginator;
use super::params::{RawQueryParams, SalesQuery};
use super::result::{ResultRecord, SalesResult};

/// Source of the dataset a query runs against
pub trait DatasetSource {
    /// Returns the active dataset or `StoreError::NotLoaded`
    fn current(&self) -> StoreResult<Arc<Dataset>>;
}

impl DatasetSource for DatasetStore {
    fn current(&self) -> StoreResult<Arc<Dataset>> {
        self.get()
    }
}

/// Runs sales queries against a dataset source
pub struct QueryExecutor<'a, S: DatasetSource> {
    source: &'a S,
}

impl<'a, S: DatasetSource> QueryExecutor<'a, S> {
    /// Creates a new executor
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Executes a query from raw parameters.
    ///
    /// Deterministic: same dataset + same parameters = same result.
    pub fn execute(&self, raw: &RawQueryParams) -> QueryResult<SalesResult> {
        // The source only fails when nothing is loaded.
        let dataset = self.source.current().map_err(|_| QueryError::NotLoaded)?;
        let query = SalesQuery::parse(raw)?;
        Ok(run_query(&dataset, &query))
    }
}

/// Runs an already-validated query against a dataset
pub fn run_query(dataset: &Dataset, query: &SalesQuery) -> SalesResult {
    let filter = SalesFilter::new(query.start_date, query.end_date, query.region.clone());
    let view = filter.apply(dataset);

    let aggregates = Aggregator::aggregate(&view);
    let page = Paginator::paginate(&view, query.page, query.limit);

    let data = page.items.iter().map(|r| ResultRecord::from(*r)).collect();

    SalesResult::new(aggregates, query.page, query.limit, page.total_pages, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::StoreError;

    struct Fixed(Option<Arc<Dataset>>);

    impl DatasetSource for Fixed {
        fn current(&self) -> StoreResult<Arc<Dataset>> {
            self.0.clone().ok_or(StoreError::NotLoaded)
        }
    }

    fn store_with(csv: &[u8]) -> DatasetStore {
        let store = DatasetStore::new();
        store.load_csv(csv).unwrap();
        store
    }

    fn params(pairs: &[(&str, &str)]) -> RawQueryParams {
        let mut raw = RawQueryParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "start_date" => raw.start_date = v,
                "end_date" => raw.end_date = v,
                "region" => raw.region = v,
                "page" => raw.page = v,
                "limit" => raw.limit = v,
                _ => {}
            }
        }
        raw
    }

    const THREE_ROWS: &[u8] = b"date,region,price,quantity\n\
        2024-01-01,USA,100,2\n\
        2024-01-05,USA,200,1\n\
        2024-01-10,Canada,50,4\n";

    #[test]
    fn test_not_loaded() {
        let source = Fixed(None);
        let err = QueryExecutor::new(&source)
            .execute(&RawQueryParams::default())
            .unwrap_err();
        assert_eq!(err, QueryError::NotLoaded);
    }

    #[test]
    fn test_not_loaded_wins_over_bad_params() {
        let store = DatasetStore::new();
        let err = QueryExecutor::new(&store)
            .execute(&params(&[("page", "x")]))
            .unwrap_err();
        assert_eq!(err, QueryError::NotLoaded);
    }

    #[test]
    fn test_unfiltered_totals() {
        let store = store_with(
            b"date,region,price,quantity\n2024-01-01,USA,100,2\n2024-01-02,Canada,50,3",
        );
        let result = QueryExecutor::new(&store)
            .execute(&RawQueryParams::default())
            .unwrap();
        assert_eq!(result.total_sales, 350.0);
        assert_eq!(result.count_transactions, 2);
        assert_eq!(result.average_sales, 175.0);
        assert_eq!(result.data[0].date, "01/01/2024");
    }

    #[test]
    fn test_region_filter() {
        let store = store_with(THREE_ROWS);
        let result = QueryExecutor::new(&store)
            .execute(&params(&[("region", "USA")]))
            .unwrap();
        assert_eq!(result.total_sales, 400.0);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_start_date_filter() {
        let store = store_with(THREE_ROWS);
        let result = QueryExecutor::new(&store)
            .execute(&params(&[("start_date", "2024-01-02")]))
            .unwrap();
        assert_eq!(result.total_sales, 400.0);
        assert_eq!(result.len(), 2);
        assert_eq!(result.data[0].region, "USA");
        assert_eq!(result.data[1].region, "Canada");
    }

    #[test]
    fn test_aggregates_ignore_pagination() {
        let store = store_with(THREE_ROWS);
        let result = QueryExecutor::new(&store)
            .execute(&params(&[("page", "2"), ("limit", "2")]))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.total_sales, 600.0);
        assert_eq!(result.count_transactions, 3);
        assert_eq!(result.total_records, 3);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_empty_filter_result() {
        let store = store_with(THREE_ROWS);
        let result = QueryExecutor::new(&store)
            .execute(&params(&[("region", "Mars")]))
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_sales, 0.0);
        assert_eq!(result.average_sales, 0.0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_invalid_parameter() {
        let store = store_with(THREE_ROWS);
        let err = QueryExecutor::new(&store)
            .execute(&params(&[("start_date", "01-2024")]))
            .unwrap_err();
        assert_eq!(err.field(), Some("start_date"));
    }
}
