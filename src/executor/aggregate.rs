//! Sales aggregation over a filtered view

use serde::Serialize;

use crate::dataset::Record;

/// Aggregates over every record of a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregates {
    /// Sum of `price * quantity`
    pub total_sales: f64,
    /// `total_sales / count_transactions`, or 0.0 for an empty view
    pub average_sales: f64,
    pub count_transactions: usize,
}

/// Computes [`Aggregates`]
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(view: &[&Record]) -> Aggregates {
        let count_transactions = view.len();
        let total_sales: f64 = view.iter().map(|r| r.sales()).sum();

        let average_sales = if count_transactions == 0 {
            0.0
        } else {
            total_sales / count_transactions as f64
        };

        Aggregates {
            total_sales,
            average_sales,
            count_transactions,
        }
    }
}
