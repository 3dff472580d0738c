//! Database schema initialization

use duckdb::{params, Connection};

use crate::error::Result;

/// Name of the play history table.
pub const PLAYS_TABLE: &str = "plays";

/// Create the play history schema if it does not exist yet.
///
/// Only the columns the report reads are declared. Stores written by the
/// tracker carry more columns, which the report queries simply ignore.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r"
        CREATE SEQUENCE IF NOT EXISTS plays_id_seq;

        CREATE TABLE IF NOT EXISTS plays (
            id INTEGER PRIMARY KEY DEFAULT nextval('plays_id_seq'),
            timestamp TIMESTAMP DEFAULT current_timestamp,
            title VARCHAR,
            artist VARCHAR,
            album VARCHAR,
            duration_ms BIGINT,
            genre VARCHAR
        );

        CREATE INDEX IF NOT EXISTS idx_plays_timestamp ON plays(timestamp);
        ",
    )?;

    Ok(())
}

/// Check whether the play history table exists.
pub fn has_plays_table(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = ?",
    )?;
    let count: i64 = stmt.query_row(params![PLAYS_TABLE], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!has_plays_table(&conn).unwrap());

        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        assert!(has_plays_table(&conn).unwrap());
    }
}
