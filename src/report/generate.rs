//! One-shot report generation: fetch, aggregate, render, write.

use std::path::{Path, PathBuf};

use crate::db::PlaySource;
use crate::error::Result;
use crate::stats::{aggregate, Stats};
use crate::year::ReportYear;

use super::render::render;
use super::template::Template;
use super::writer::write_report;

/// Outcome of a written report.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub song_count: usize,
    pub stats: Stats,
}

/// Generate the report for `year` into `out_dir`.
///
/// Returns `Ok(None)` when the year has no plays; nothing is aggregated or
/// written in that case.
pub fn generate(
    source: &dyn PlaySource,
    template: &Template,
    year: ReportYear,
    out_dir: &Path,
) -> Result<Option<GeneratedReport>> {
    let plays = source.plays_for_year(year)?;
    if plays.is_empty() {
        tracing::info!("No plays for {year}");
        return Ok(None);
    }
    tracing::info!("Found {} plays", plays.len());

    let stats = aggregate(&plays);
    tracing::debug!(
        "Top song '{}' ({} plays), {:.1} hours total",
        stats.top_song.name,
        stats.top_song.count,
        stats.total_hours
    );

    let html = render(template, year, &plays, &stats)?;
    let path = write_report(out_dir, year, &html)?;

    Ok(Some(GeneratedReport {
        path,
        song_count: plays.len(),
        stats,
    }))
}
