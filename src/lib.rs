//! # Play History
//!
//! Yearly listening reports from a local play history store.
//!
//! This crate provides:
//! - A read-only DuckDB source for the plays of one calendar year
//! - Aggregation of those plays into top songs, artists, albums and genres
//! - Rendering of the results into a self-contained HTML report
//!
//! The pipeline is three plain functions plus a file write:
//!
//! ```no_run
//! use play_history::{aggregate, report, Database, PlaySource, ReportYear};
//!
//! # fn main() -> play_history::Result<()> {
//! let year = ReportYear::parse("2025")?;
//! let db = Database::open(std::path::Path::new("listens.duckdb"))?;
//! let plays = db.plays_for_year(year)?;
//! if !plays.is_empty() {
//!     let stats = aggregate(&plays);
//!     let html = report::render(&report::Template::builtin(), year, &plays, &stats)?;
//!     report::write_report(std::path::Path::new("."), year, &html)?;
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod record;
pub mod report;
pub mod stats;
pub mod types;
pub mod year;

pub use config::Config;
pub use db::{Database, PlaySource};
pub use error::{Error, Result};
pub use record::PlayRecord;
pub use stats::{aggregate, Stats};
pub use year::ReportYear;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "play-history";
