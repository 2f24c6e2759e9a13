//! # Query Parameter Parser
//!
//! Parses raw string parameters from a request into a typed [`SalesQuery`].

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dataset::parse_date;

use super::errors::{QueryError, QueryResult};

/// Page number used when `page` is absent
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is absent
pub const DEFAULT_LIMIT: usize = 10;

/// Raw, unvalidated query parameters as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQueryParams {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl RawQueryParams {
    /// Collect the known parameters from a query-string map. Unknown keys are ignored.
    pub fn from_map(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned();
        Self {
            start_date: get("start_date"),
            end_date: get("end_date"),
            region: get("region"),
            page: get("page"),
            limit: get("limit"),
        }
    }
}

/// A validated query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    /// Inclusive lower bound on `date`
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `date`
    pub end_date: Option<NaiveDate>,
    /// Exact, case-sensitive region match
    pub region: Option<String>,
    /// 1-based page number
    pub page: usize,
    /// Page size
    pub limit: usize,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            region: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SalesQuery {
    /// Parse raw parameters.
    ///
    /// Present-but-empty values count as absent. Anything else that fails to
    /// parse is an `InvalidParameter` naming the field.
    pub fn parse(raw: &RawQueryParams) -> QueryResult<Self> {
        Ok(Self {
            start_date: parse_date_param("start_date", raw.start_date.as_deref())?,
            end_date: parse_date_param("end_date", raw.end_date.as_deref())?,
            region: non_empty(raw.region.as_deref()).map(str::to_string),
            page: parse_positive_param("page", raw.page.as_deref(), DEFAULT_PAGE)?,
            limit: parse_positive_param("limit", raw.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse an optional date parameter
fn parse_date_param(field: &'static str, value: Option<&str>) -> QueryResult<Option<NaiveDate>> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => parse_date(v)
            .map(Some)
            .ok_or_else(|| QueryError::invalid_parameter(field, v, "is not a valid date")),
    }
}

/// Parse an optional integer parameter that must be at least 1
fn parse_positive_param(
    field: &'static str,
    value: Option<&str>,
    default: usize,
) -> QueryResult<usize> {
    let v = match non_empty(value) {
        None => return Ok(default),
        Some(v) => v,
    };

    let n: i64 = v
        .trim()
        .parse()
        .map_err(|_| QueryError::invalid_parameter(field, v, "is not an integer"))?;

    if n < 1 {
        return Err(QueryError::invalid_parameter(field, v, "must be at least 1"));
    }

    usize::try_from(n).map_err(|_| QueryError::invalid_parameter(field, v, "is too large"))
}
