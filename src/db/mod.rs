//! Database module using DuckDB
//!
//! Read side of the play history store. The report only ever queries it;
//! the store is opened read-only so a running tracker is never disturbed.

mod filter;
mod queries;
mod schema;

pub use filter::YearFilter;

use duckdb::{AccessMode, Config as DuckConfig, Connection};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::PlayRecord;
use crate::year::ReportYear;

/// Anything that can supply the plays of one calendar year.
///
/// Implementations return records already normalized (see
/// [`PlayRecord::from_raw`]) and ordered most recent first.
pub trait PlaySource {
    /// Fetch every play of `year`.
    fn plays_for_year(&self, year: ReportYear) -> Result<Vec<PlayRecord>>;
}

/// Database wrapper for the play history store
pub struct Database {
    conn: Connection,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Open an existing play history store read-only.
    ///
    /// Fails if the file does not exist or holds no `plays` table.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing_file("Database", path));
        }

        let config = DuckConfig::default().access_mode(AccessMode::ReadOnly)?;
        let conn = Connection::open_with_flags(path, config)?;

        if !schema::has_plays_table(&conn)? {
            return Err(Error::config(format!(
                "{} has no '{}' table",
                path.display(),
                schema::PLAYS_TABLE
            )));
        }

        tracing::debug!("Opened play history at {}", path.display());
        Ok(Self { conn })
    }

    /// Create an empty in-memory store with the play history schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn insert(&self, play: &crate::record::RawPlay) -> Result<()> {
        queries::insert_play(&self.conn, play)
    }
}

impl PlaySource for Database {
    fn plays_for_year(&self, year: ReportYear) -> Result<Vec<PlayRecord>> {
        let plays = queries::get_plays_for_year(&self.conn, year)?;
        tracing::debug!("Fetched {} plays for {year}", plays.len());
        Ok(plays)
    }
}
