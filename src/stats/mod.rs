//! Yearly listening statistics.
//!
//! [`aggregate`] turns the plays of one year into a [`Stats`] value: the
//! single top song, artist, album and genre, the listening time totals, and
//! four ranked lists for the report charts.
//!
//! Every ranking follows the same rules:
//!
//! - plays are grouped by a key and counted;
//! - groups are ordered by descending count, and groups with equal counts
//!   keep the order in which they first appeared in the input;
//! - plays without a genre never form a genre group.
//!
//! The monthly pattern is the one exception: it is ordered by month.

mod tally;

pub use tally::Tally;

use crate::record::PlayRecord;
use crate::types::{Milliseconds, PlayCount};

/// Length of every ranked list.
pub const TOP_N: usize = 10;

/// Name reported when a metric has no data at all.
pub const NOT_AVAILABLE: &str = "N/A";

const HOURS_PER_DAY: f64 = 24.0;

/// The largest group of one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    pub name: String,
    /// Secondary label: the artist of a song or album.
    pub sub_name: Option<String>,
    pub count: PlayCount,
}

impl RankedItem {
    #[must_use]
    pub fn new(name: impl Into<String>, count: PlayCount) -> Self {
        Self {
            name: name.into(),
            sub_name: None,
            count,
        }
    }

    #[must_use]
    pub fn with_sub_name(mut self, sub_name: impl Into<String>) -> Self {
        self.sub_name = Some(sub_name.into());
        self
    }

    /// Placeholder for a metric without any qualifying plays.
    #[must_use]
    pub fn not_available() -> Self {
        Self::new(NOT_AVAILABLE, PlayCount::default())
    }
}

/// One bar of a report chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartItem {
    pub label: String,
    pub value: PlayCount,
}

impl ChartItem {
    #[must_use]
    pub fn new(label: impl Into<String>, value: PlayCount) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Everything the report shows about one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub top_song: RankedItem,
    pub top_artist: RankedItem,
    pub top_album: RankedItem,
    pub top_genre: RankedItem,

    pub total: Milliseconds,
    pub total_hours: f64,
    pub total_days: f64,

    pub top_artists: Vec<ChartItem>,
    pub genre_distribution: Vec<ChartItem>,
    pub top_albums: Vec<ChartItem>,
    pub monthly_pattern: Vec<ChartItem>,

    pub unique_songs: usize,
    pub unique_artists: usize,
    pub unique_albums: usize,
}

impl Stats {
    /// Whether any play carried a track length.
    #[must_use]
    pub const fn has_duration(&self) -> bool {
        !self.total.is_zero()
    }

    /// Whether any play carried a genre.
    #[must_use]
    pub fn has_genre(&self) -> bool {
        !self.genre_distribution.is_empty()
    }
}

/// Compute the statistics of one year of plays.
///
/// Callers skip aggregation when the year has no plays; an empty slice
/// still produces a value, with `N/A` tops and zero totals.
#[must_use]
pub fn aggregate(records: &[PlayRecord]) -> Stats {
    let songs: Tally<(&str, &str)> = records
        .iter()
        .map(|r| (r.title.as_str(), r.artist.as_str()))
        .collect();
    let artists: Tally<&str> = records.iter().map(|r| r.artist.as_str()).collect();
    let albums: Tally<(&str, &str)> = records
        .iter()
        .map(|r| (r.album.as_str(), r.artist.as_str()))
        .collect();
    let genres: Tally<&str> = records
        .iter()
        .filter(|r| r.has_genre())
        .map(|r| r.genre.as_str())
        .collect();
    let months: Tally<&str> = records.iter().filter_map(PlayRecord::month_key).collect();

    let unique_songs = songs.len();
    let unique_artists = artists.len();
    let unique_albums = albums.len();

    let songs = songs.ranked();
    let artists = artists.ranked();
    let albums = albums.ranked();
    let genres = genres.ranked();
    let months = months.by_key();

    let total: Milliseconds = records.iter().map(|r| r.duration).sum();
    let total_hours = total.as_hours_f64();

    Stats {
        top_song: top(&songs, |&(title, artist)| (title, Some(artist))),
        top_artist: top(&artists, |&name| (name, None)),
        top_album: top(&albums, |&(album, artist)| (album, Some(artist))),
        top_genre: top(&genres, |&name| (name, None)),

        total,
        total_hours,
        total_days: total_hours / HOURS_PER_DAY,

        top_artists: chart(&artists, |&name| name),
        genre_distribution: chart(&genres, |&name| name),
        top_albums: chart(&albums, |&(album, _)| album),
        monthly_pattern: chart(&months, |&month| month),

        unique_songs,
        unique_artists,
        unique_albums,
    }
}

/// First group of a ranking, or `N/A`.
fn top<'a, K>(
    groups: &[(K, PlayCount)],
    names: impl Fn(&K) -> (&'a str, Option<&'a str>),
) -> RankedItem {
    groups.first().map_or_else(RankedItem::not_available, |(key, count)| {
        let (name, sub_name) = names(key);
        let item = RankedItem::new(name, *count);
        match sub_name {
            Some(sub_name) => item.with_sub_name(sub_name),
            None => item,
        }
    })
}

/// First [`TOP_N`] groups of a ranking as chart bars.
fn chart<'a, K>(groups: &[(K, PlayCount)], label: impl Fn(&K) -> &'a str) -> Vec<ChartItem> {
    groups
        .iter()
        .take(TOP_N)
        .map(|(key, count)| ChartItem::new(label(key), *count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(title: &str, artist: &str, album: &str, played_at: &str, ms: u64, genre: &str) -> PlayRecord {
        PlayRecord::new(title, artist, album, played_at, Milliseconds::new(ms), genre)
    }

    fn sample() -> Vec<PlayRecord> {
        let mut records = vec![play("Song A", "Artist X", "Album 1", "2025-01-05", 200_000, "Rock"); 3];
        records.push(play("Song B", "Artist Y", "Album 2", "2025-02-10", 100_000, "Pop"));
        records
    }

    fn labels(items: &[ChartItem]) -> Vec<(&str, u64)> {
        items.iter().map(|i| (i.label.as_str(), i.value.get())).collect()
    }

    #[test]
    fn test_sample_year() {
        let stats = aggregate(&sample());

        assert_eq!(stats.top_song, RankedItem::new("Song A", PlayCount::new(3)).with_sub_name("Artist X"));
        assert_eq!(stats.top_artist, RankedItem::new("Artist X", PlayCount::new(3)));
        assert_eq!(stats.top_album, RankedItem::new("Album 1", PlayCount::new(3)).with_sub_name("Artist X"));
        assert_eq!(stats.top_genre, RankedItem::new("Rock", PlayCount::new(3)));

        assert_eq!(stats.total, Milliseconds::new(700_000));
        assert!((stats.total_hours - 0.194_444).abs() < 1e-4);
        assert!((stats.total_days - stats.total_hours / 24.0).abs() < 1e-12);

        assert_eq!(labels(&stats.monthly_pattern), vec![("2025-01", 3), ("2025-02", 1)]);
        assert_eq!(labels(&stats.top_artists), vec![("Artist X", 3), ("Artist Y", 1)]);
        assert_eq!(labels(&stats.genre_distribution), vec![("Rock", 3), ("Pop", 1)]);
        assert_eq!(labels(&stats.top_albums), vec![("Album 1", 3), ("Album 2", 1)]);

        assert_eq!(stats.unique_songs, 2);
        assert_eq!(stats.unique_artists, 2);
        assert_eq!(stats.unique_albums, 2);
        assert!(stats.has_duration());
        assert!(stats.has_genre());
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let records = vec![
            play("Late", "B", "Beta", "2025-05-01", 0, ""),
            play("Early", "A", "Alpha", "2025-04-01", 0, ""),
            play("Late", "B", "Beta", "2025-05-02", 0, ""),
            play("Early", "A", "Alpha", "2025-04-02", 0, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.top_song.name, "Late");
        assert_eq!(stats.top_artist.name, "B");
        assert_eq!(labels(&stats.top_artists), vec![("B", 2), ("A", 2)]);
    }

    #[test]
    fn test_same_title_different_artists_are_different_songs() {
        let records = vec![
            play("Intro", "A", "One", "2025-01-01", 0, ""),
            play("Intro", "B", "Two", "2025-01-02", 0, ""),
            play("Outro", "C", "Three", "2025-01-03", 0, ""),
            play("Outro", "C", "Three", "2025-01-04", 0, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.top_song, RankedItem::new("Outro", PlayCount::new(2)).with_sub_name("C"));
        assert_eq!(stats.unique_songs, 3);
    }

    #[test]
    fn test_same_album_name_by_different_artists() {
        let records = vec![
            play("a", "A", "Greatest Hits", "2025-01-01", 0, ""),
            play("b", "B", "Greatest Hits", "2025-01-02", 0, ""),
            play("c", "B", "Greatest Hits", "2025-01-03", 0, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.top_album, RankedItem::new("Greatest Hits", PlayCount::new(2)).with_sub_name("B"));
        assert_eq!(
            labels(&stats.top_albums),
            vec![("Greatest Hits", 2), ("Greatest Hits", 1)]
        );
    }

    #[test]
    fn test_ranked_lists_are_capped() {
        let records: Vec<_> = (0..15u64)
            .flat_map(|i| {
                let artist = format!("Artist {i:02}");
                // Artist 00 gets 15 plays, Artist 14 gets one
                (0..15 - i).map(move |_| {
                    play("t", &artist, &artist, "2025-01-01", 0, &artist)
                })
            })
            .collect();
        let stats = aggregate(&records);

        assert_eq!(stats.top_artists.len(), TOP_N);
        assert_eq!(stats.genre_distribution.len(), TOP_N);
        assert_eq!(stats.top_albums.len(), TOP_N);
        assert_eq!(stats.top_artists[0].label, "Artist 00");
        assert_eq!(stats.top_artists[9].label, "Artist 09");
        assert!(stats
            .top_artists
            .windows(2)
            .all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_short_lists_are_not_padded() {
        let stats = aggregate(&sample());
        assert_eq!(stats.top_artists.len(), 2);
    }

    #[test]
    fn test_no_genre_data() {
        let records = vec![
            play("a", "A", "One", "2025-01-01", 1000, ""),
            play("b", "B", "Two", "2025-01-02", 1000, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.top_genre, RankedItem::new("N/A", PlayCount::new(0)));
        assert!(stats.genre_distribution.is_empty());
        assert!(!stats.has_genre());
    }

    #[test]
    fn test_missing_genres_do_not_form_a_group() {
        let records = vec![
            play("a", "A", "One", "2025-01-01", 0, ""),
            play("b", "A", "One", "2025-01-02", 0, ""),
            play("c", "A", "One", "2025-01-03", 0, "Jazz"),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.top_genre, RankedItem::new("Jazz", PlayCount::new(1)));
        assert_eq!(labels(&stats.genre_distribution), vec![("Jazz", 1)]);
    }

    #[test]
    fn test_no_duration_data() {
        let records = vec![play("a", "A", "One", "2025-01-01", 0, "Rock")];
        let stats = aggregate(&records);

        assert!(stats.total.is_zero());
        assert!(stats.total_hours.abs() < f64::EPSILON);
        assert!(stats.total_days.abs() < f64::EPSILON);
        assert!(!stats.has_duration());
    }

    #[test]
    fn test_total_is_exact_sum() {
        let records = vec![
            play("a", "A", "One", "2025-01-01", 3_600_000, ""),
            play("b", "A", "One", "2025-01-01", 86_400_000, ""),
            play("c", "A", "One", "2025-01-01", 1, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(stats.total, Milliseconds::new(90_000_001));
        assert!((stats.total_hours - 90_000_001.0 / 3_600_000.0).abs() < 1e-9);
        assert!((stats.total_days - 90_000_001.0 / 3_600_000.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_pattern_is_chronological() {
        let records = vec![
            play("a", "A", "One", "2025-11-30 23:00:00", 0, ""),
            play("a", "A", "One", "2025-02-01 08:00:00", 0, ""),
            play("a", "A", "One", "2025-11-01 09:00:00", 0, ""),
            play("a", "A", "One", "2025-0", 0, ""),
            play("a", "A", "One", "", 0, ""),
        ];
        let stats = aggregate(&records);

        assert_eq!(labels(&stats.monthly_pattern), vec![("2025-02", 1), ("2025-11", 2)]);
    }

    #[test]
    fn test_monthly_pattern_is_capped() {
        let records: Vec<_> = (1..=12)
            .map(|m| play("a", "A", "One", &format!("2025-{m:02}-15"), 0, ""))
            .collect();
        let stats = aggregate(&records);

        assert_eq!(stats.monthly_pattern.len(), TOP_N);
        assert_eq!(stats.monthly_pattern[0].label, "2025-01");
        assert_eq!(stats.monthly_pattern[9].label, "2025-10");
    }

    #[test]
    fn test_result_does_not_depend_on_group_iteration() {
        let forward = sample();
        let mut reversed = sample();
        reversed.reverse();

        let a = aggregate(&forward);
        let b = aggregate(&reversed);
        assert_eq!(a.total, b.total);
        assert_eq!(a.top_song, b.top_song);
        assert_eq!(a.monthly_pattern, b.monthly_pattern);
    }

    #[test]
    fn test_empty_input_degrades() {
        let stats = aggregate(&[]);
        assert_eq!(stats.top_song, RankedItem::not_available());
        assert!(stats.top_artists.is_empty());
        assert!(stats.total.is_zero());
    }
}
