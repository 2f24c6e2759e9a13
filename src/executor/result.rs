//! Result types for sales queries

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{format_date, Record};

use super::aggregate::Aggregates;

/// A single output record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// `MM/DD/YYYY`
    pub date: String,
    pub region: String,
    pub price: f64,
    pub quantity: u64,
    /// Derived `price * quantity`
    pub sales: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl From<&Record> for ResultRecord {
    fn from(record: &Record) -> Self {
        Self {
            date: format_date(record.date),
            region: record.region.clone(),
            price: record.price,
            quantity: record.quantity,
            sales: record.sales(),
            extra: record.extra.clone(),
        }
    }
}

/// Result of a sales query
///
/// Aggregates and `total_records` cover the whole filtered set;
/// `data` holds only the requested page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesResult {
    pub total_sales: f64,
    pub average_sales: f64,
    pub count_transactions: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub data: Vec<ResultRecord>,
}

impl SalesResult {
    pub fn new(
        aggregates: Aggregates,
        page: usize,
        limit: usize,
        total_pages: usize,
        data: Vec<ResultRecord>,
    ) -> Self {
        Self {
            total_sales: aggregates.total_sales,
            average_sales: aggregates.average_sales,
            count_transactions: aggregates.count_transactions,
            page,
            limit,
            total_pages,
            total_records: aggregates.count_transactions,
            data,
        }
    }

    /// Returns true if the page holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_result_record_serialization() {
        let mut record = Record::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "USA", 100.0, 2);
        record.extra.insert("sku".to_string(), "A-1".to_string());

        let json = serde_json::to_value(ResultRecord::from(&record)).unwrap();
        assert_eq!(json["date"], "01/02/2024");
        assert_eq!(json["region"], "USA");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["sales"], 200.0);
        assert_eq!(json["sku"], "A-1");
    }

    #[test]
    fn test_sales_result_serialization() {
        let aggregates = Aggregates {
            total_sales: 0.0,
            average_sales: 0.0,
            count_transactions: 0,
        };
        let result = SalesResult::new(aggregates, 1, 10, 0, Vec::new());
        assert!(result.is_empty());

        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "total_sales",
            "average_sales",
            "count_transactions",
            "page",
            "limit",
            "total_pages",
            "total_records",
            "data",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
