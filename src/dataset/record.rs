//! Typed transaction records and the dataset that holds them

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::errors::{StoreError, StoreResult};

/// Columns every upload must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "region", "price", "quantity"];

/// Name of the derived column added to query output
pub const SALES_COLUMN: &str = "sales";

/// Date formats accepted on input, tried in order
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Date format used on output
const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A raw decoded row: column name to cell text
pub type RawRow = BTreeMap<String, String>;

/// Parses a calendar date (`YYYY-MM-DD` or `MM/DD/YYYY`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Formats a date as `MM/DD/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

fn required_field<'a>(raw: &'a RawRow, row: usize, column: &str) -> StoreResult<&'a str> {
    raw.get(column)
        .map(String::as_str)
        .ok_or_else(|| StoreError::MissingField {
            row,
            column: column.to_string(),
        })
}

/// One sales transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub region: String,
    pub price: f64,
    pub quantity: u64,
    /// Columns outside the required set, kept verbatim
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Creates a record with no extra columns
    pub fn new(date: NaiveDate, region: impl Into<String>, price: f64, quantity: u64) -> Self {
        Self {
            date,
            region: region.into(),
            price,
            quantity,
            extra: BTreeMap::new(),
        }
    }

    /// Derived sale amount, never stored
    pub fn sales(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Builds a record from a raw row. `row` is the 1-based data row number.
    pub fn from_raw(row: usize, raw: &RawRow) -> StoreResult<Self> {
        let date_text = required_field(raw, row, "date")?;
        let date = parse_date(date_text)
            .ok_or_else(|| StoreError::invalid_value(row, "date", date_text, "not a calendar date"))?;

        let region = required_field(raw, row, "region")?.to_string();

        let price_text = required_field(raw, row, "price")?;
        let price: f64 = price_text
            .trim()
            .parse()
            .map_err(|_| StoreError::invalid_value(row, "price", price_text, "not a number"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::invalid_value(
                row,
                "price",
                price_text,
                "must be a non-negative number",
            ));
        }

        let quantity_text = required_field(raw, row, "quantity")?;
        let quantity: u64 = quantity_text.trim().parse().map_err(|_| {
            StoreError::invalid_value(
                row,
                "quantity",
                quantity_text,
                "must be a non-negative integer",
            )
        })?;

        // The derived column always wins over an uploaded one of the same name.
        let extra = raw
            .iter()
            .filter(|(k, _)| !REQUIRED_COLUMNS.contains(&k.as_str()) && k.as_str() != SALES_COLUMN)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            date,
            region,
            price,
            quantity,
            extra,
        })
    }
}

/// The loaded dataset. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from already-typed records
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Validates and converts raw rows. Any failing row rejects the whole set.
    pub fn from_rows(columns: Vec<String>, rows: &[RawRow]) -> StoreResult<Self> {
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|required| !columns.iter().any(|c| c == required))
        {
            return Err(StoreError::MissingColumn(missing.to_string()));
        }

        let records = rows
            .iter()
            .enumerate()
            .map(|(i, raw)| Record::from_raw(i + 1, raw))
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(Self { columns, records })
    }

    /// Header columns in upload order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in upload order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn columns() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_date("2024-01-05"), Some(expected));
        assert_eq!(parse_date("01/05/2024"), Some(expected));
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "01/05/2024");
    }

    #[test]
    fn test_record_sales() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = Record::new(date, "USA", 100.0, 2);
        assert_eq!(record.sales(), 200.0);
    }

    #[test]
    fn test_from_raw_keeps_extra_columns() {
        let row = raw(&[
            ("date", "2024-01-01"),
            ("region", "USA"),
            ("price", "9.5"),
            ("quantity", "4"),
            ("sku", "A-1"),
            ("sales", "ignored"),
        ]);
        let record = Record::from_raw(1, &row).unwrap();
        assert_eq!(record.price, 9.5);
        assert_eq!(record.quantity, 4);
        assert_eq!(record.extra.get("sku").map(String::as_str), Some("A-1"));
        assert!(!record.extra.contains_key("sales"));
    }

    #[test]
    fn test_from_raw_rejects_bad_values() {
        let bad_date = raw(&[
            ("date", "2024-13-01"),
            ("region", "USA"),
            ("price", "1"),
            ("quantity", "1"),
        ]);
        assert!(matches!(
            Record::from_raw(2, &bad_date),
            Err(StoreError::InvalidValue { row: 2, .. })
        ));

        let negative_price = raw(&[
            ("date", "2024-01-01"),
            ("region", "USA"),
            ("price", "-1"),
            ("quantity", "1"),
        ]);
        assert!(Record::from_raw(1, &negative_price).is_err());

        let fractional_quantity = raw(&[
            ("date", "2024-01-01"),
            ("region", "USA"),
            ("price", "1"),
            ("quantity", "1.5"),
        ]);
        assert!(Record::from_raw(1, &fractional_quantity).is_err());
    }

    #[test]
    fn test_from_rows_missing_column() {
        let cols = vec!["date".to_string(), "region".to_string(), "price".to_string()];
        let err = Dataset::from_rows(cols, &[]).unwrap_err();
        assert_eq!(err, StoreError::MissingColumn("quantity".to_string()));
    }

    #[test]
    fn test_from_rows_is_all_or_nothing() {
        let rows = vec![
            raw(&[
                ("date", "2024-01-01"),
                ("region", "USA"),
                ("price", "100"),
                ("quantity", "2"),
            ]),
            raw(&[("date", "2024-01-02"), ("region", "Canada"), ("price", "50")]),
        ];
        let err = Dataset::from_rows(columns(), &rows).unwrap_err();
        assert_eq!(
            err,
            StoreError::MissingField {
                row: 2,
                column: "quantity".to_string()
            }
        );
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows = vec![
            raw(&[
                ("date", "2024-01-02"),
                ("region", "Canada"),
                ("price", "50"),
                ("quantity", "3"),
            ]),
            raw(&[
                ("date", "2024-01-01"),
                ("region", "USA"),
                ("price", "100"),
                ("quantity", "2"),
            ]),
        ];
        let dataset = Dataset::from_rows(columns(), &rows).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].region, "Canada");
        assert_eq!(dataset.records()[1].region, "USA");
    }
}
