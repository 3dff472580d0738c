//! Query filter utilities for building parameterized SQL queries.

use duckdb::ToSql;

use crate::year::ReportYear;

/// Calendar year filter for play queries.
#[derive(Debug, Clone, Copy)]
pub struct YearFilter {
    pub year: ReportYear,
}

impl YearFilter {
    /// Create a new year filter.
    pub const fn new(year: ReportYear) -> Self {
        Self { year }
    }

    /// Append the year clause to a query string.
    ///
    /// The clause is a half-open timestamp range, so it can be served by the
    /// timestamp index. Rows without a timestamp never match.
    pub fn apply(&self, query: &mut String, params: &mut Vec<i32>) {
        let (start, end) = self.year.bounds();
        query.push_str(
            " AND timestamp >= make_timestamp(?, 1, 1, 0, 0, 0) \
             AND timestamp < make_timestamp(?, 1, 1, 0, 0, 0)",
        );
        params.push(start);
        params.push(end);
    }

    /// Borrow params as DuckDB bind values.
    pub fn params_as_refs(params: &[i32]) -> Vec<&dyn ToSql> {
        params.iter().map(|p| p as &dyn ToSql).collect()
    }
}
