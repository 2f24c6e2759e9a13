//! Predicate filtering for sales queries
//!
//! Filters records by inclusive date bounds and exact region.
//! No coercion, no case folding, AND semantics.

use chrono::NaiveDate;

use crate::dataset::{Dataset, Record};

/// Ordered subsequence of a dataset that matched the active predicates
pub type FilteredView<'a> = Vec<&'a Record>;

/// The predicates of one query. `None` passes every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub region: Option<String>,
}

impl SalesFilter {
    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        region: Option<String>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            region,
        }
    }

    /// Checks if a record matches all predicates
    pub fn matches(&self, record: &Record) -> bool {
        self.start_date.map_or(true, |start| record.date >= start)
            && self.end_date.map_or(true, |end| record.date <= end)
            && self
                .region
                .as_deref()
                .map_or(true, |region| record.region == region)
    }

    /// Returns the matching records in dataset order
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        dataset
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
