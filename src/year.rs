//! Report year parsing and validation.
//!
//! A report always covers one calendar year. `ReportYear` is the only way
//! to name that year, so a value that exists has already been validated.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// First year a report can be generated for.
pub const MIN_YEAR: i32 = 2025;

/// Last year a report can be generated for.
pub const MAX_YEAR: i32 = 9999;

/// A validated four-digit calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportYear(i32);

impl ReportYear {
    /// Validate a numeric year.
    pub fn new(year: i32) -> Result<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(Self(year))
        } else {
            Err(Error::InvalidYear(format!(
                "{year} is outside {MIN_YEAR}..={MAX_YEAR}"
            )))
        }
    }

    /// Parse a year argument. Only exactly four ASCII digits are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidYear(format!(
                "'{input}' is not a four-digit year"
            )));
        }
        let year = input
            .parse::<i32>()
            .map_err(|e| Error::InvalidYear(format!("'{input}': {e}")))?;
        Self::new(year)
    }

    /// Get the numeric year.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// First and one-past-last calendar year of the report, as a half-open
    /// range `[start, end)` of January 1sts.
    #[must_use]
    pub const fn bounds(self) -> (i32, i32) {
        (self.0, self.0 + 1)
    }
}

impl FromStr for ReportYear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReportYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_year() {
        let year = ReportYear::parse("2025").unwrap();
        assert_eq!(year.get(), 2025);
        assert_eq!(year.to_string(), "2025");
    }

    #[test]
    fn test_bounds() {
        assert_eq!(ReportYear::new(2025).unwrap().bounds(), (2025, 2026));
        assert_eq!(ReportYear::new(MAX_YEAR).unwrap().bounds(), (9999, 10000));
    }

    #[test]
    fn test_parse_upper_bound() {
        assert_eq!(ReportYear::parse("9999").unwrap().get(), 9999);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            ReportYear::parse("2024"),
            Err(Error::InvalidYear(_))
        ));
        assert!(ReportYear::new(10_000).is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(ReportYear::parse("20a5").is_err());
        assert!(ReportYear::parse("").is_err());
        assert!(ReportYear::parse("+2025").is_err());
        assert!(ReportYear::parse("02025").is_err());
    }

    #[test]
    fn test_from_str() {
        let year: ReportYear = " 2031 ".parse().unwrap();
        assert_eq!(year.get(), 2031);
    }
}
