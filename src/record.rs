//! Play records and boundary normalization.
//!
//! The history store may hold nulls or blank strings in any metadata column.
//! [`PlayRecord::from_raw`] replaces them with the documented defaults, so
//! the aggregator and renderer only ever see plain strings and numbers.

use crate::types::Milliseconds;

/// Title used when the store has none.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist used when the store has none.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Album used when the store has none.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A play row exactly as read from the store, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct RawPlay {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub played_at: Option<String>,
    pub duration_ms: Option<i64>,
    pub genre: Option<String>,
}

/// One historical play event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// `YYYY-MM-DD HH:MM:SS`, or empty when the store had no timestamp.
    pub played_at: String,
    /// Zero when the length is unknown.
    pub duration: Milliseconds,
    /// Empty when the genre is unknown.
    pub genre: String,
}

impl PlayRecord {
    /// Build a record from already-normalized parts.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        played_at: impl Into<String>,
        duration: Milliseconds,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            played_at: played_at.into(),
            duration,
            genre: genre.into(),
        }
    }

    /// Apply the store defaults to a raw row.
    #[must_use]
    pub fn from_raw(raw: RawPlay) -> Self {
        Self {
            title: non_blank(raw.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist: non_blank(raw.artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: non_blank(raw.album).unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            played_at: non_blank(raw.played_at).unwrap_or_default(),
            duration: Milliseconds::from_db(raw.duration_ms),
            genre: non_blank(raw.genre).unwrap_or_default(),
        }
    }

    /// Calendar month bucket (`YYYY-MM`), if the timestamp is long enough.
    #[must_use]
    pub fn month_key(&self) -> Option<&str> {
        let end = self
            .played_at
            .char_indices()
            .map(|(idx, c)| idx + c.len_utf8())
            .nth(6)?;
        Some(&self.played_at[..end])
    }

    /// Whether the record carries a genre.
    #[must_use]
    pub fn has_genre(&self) -> bool {
        !self.genre.is_empty()
    }
}

impl From<RawPlay> for PlayRecord {
    fn from(raw: RawPlay) -> Self {
        Self::from_raw(raw)
    }
}

/// Trim a value and drop it if nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
