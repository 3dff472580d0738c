//! Writes a rendered report to disk.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::year::ReportYear;

/// File name of the report for `year`.
#[must_use]
pub fn report_file_name(year: ReportYear) -> String {
    format!("PlayHistory_{year}.html")
}

/// Write `html` into `dir` under the report's file name.
///
/// An existing report for the same year is replaced.
pub fn write_report(dir: &Path, year: ReportYear, html: &str) -> Result<PathBuf> {
    let path = dir.join(report_file_name(year));
    std::fs::write(&path, html)?;
    tracing::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}
