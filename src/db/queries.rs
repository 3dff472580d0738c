//! Database query implementations for DuckDB

use duckdb::Connection;

use crate::error::Result;
use crate::record::{PlayRecord, RawPlay};
use crate::year::ReportYear;

use super::filter::YearFilter;

/// Get every play of a calendar year, most recent first.
///
/// Nullable columns are read as `Option` and normalized into
/// [`PlayRecord`] defaults here, at the boundary.
pub fn get_plays_for_year(conn: &Connection, year: ReportYear) -> Result<Vec<PlayRecord>> {
    let mut query = r"
        SELECT
            title,
            artist,
            album,
            strftime(timestamp, '%Y-%m-%d %H:%M:%S') as played_at,
            duration_ms,
            genre
        FROM plays
        WHERE 1=1
    "
    .to_string();

    let mut param_values = Vec::new();
    YearFilter::new(year).apply(&mut query, &mut param_values);

    query.push_str(" ORDER BY timestamp DESC, id DESC");

    let params = YearFilter::params_as_refs(&param_values);
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(params.as_slice(), |row| {
        Ok(RawPlay {
            title: row.get(0)?,
            artist: row.get(1)?,
            album: row.get(2)?,
            played_at: row.get(3)?,
            duration_ms: row.get(4)?,
            genre: row.get(5)?,
        })
    })?;

    let mut plays = Vec::new();
    for row in rows {
        plays.push(PlayRecord::from_raw(row?));
    }

    Ok(plays)
}

/// Insert a raw play row. Test fixtures only; the report never writes.
#[cfg(test)]
pub fn insert_play(conn: &Connection, play: &RawPlay) -> Result<()> {
    conn.execute(
        r"
        INSERT INTO plays (timestamp, title, artist, album, duration_ms, genre)
        VALUES (CAST(? AS TIMESTAMP), ?, ?, ?, ?, ?)
        ",
        duckdb::params![
            play.played_at.as_deref(),
            play.title.as_deref(),
            play.artist.as_deref(),
            play.album.as_deref(),
            play.duration_ms,
            play.genre.as_deref(),
        ],
    )?;

    Ok(())
}
