//! Rendering of yearly statistics into a report template.

use std::collections::HashMap;

use crate::error::Result;
use crate::record::PlayRecord;
use crate::stats::{ChartItem, RankedItem, Stats};
use crate::year::ReportYear;

use super::encode::{html_encode, html_encode_opt, script_json};
use super::template::Template;

/// Fill `template` with the report for `year`.
///
/// `records` are listed verbatim, in the given order, in the song table.
pub fn render(
    template: &Template,
    year: ReportYear,
    records: &[PlayRecord],
    stats: &Stats,
) -> Result<String> {
    let values = placeholder_values(year, records, stats)?;
    Ok(template.substitute(&values))
}

/// Build the value of every placeholder.
fn placeholder_values(
    year: ReportYear,
    records: &[PlayRecord],
    stats: &Stats,
) -> Result<HashMap<&'static str, String>> {
    let mut values = HashMap::new();

    values.insert("year", year.to_string());
    values.insert("songCount", records.len().to_string());
    values.insert("songRows", song_rows(records));

    insert_ranked(&mut values, &stats.top_song, "topSongTitle", Some("topSongArtist"), "topSongCount");
    insert_ranked(&mut values, &stats.top_artist, "topArtistName", None, "topArtistCount");
    insert_ranked(&mut values, &stats.top_album, "topAlbumTitle", Some("topAlbumArtist"), "topAlbumCount");
    insert_ranked(&mut values, &stats.top_genre, "topGenreName", None, "topGenreCount");

    values.insert(
        "totalDuration",
        format_total_duration(stats.total_hours, stats.total_days),
    );
    values.insert("hasDuration", stats.has_duration().to_string());
    values.insert("hasGenre", stats.has_genre().to_string());

    insert_chart(&mut values, &stats.top_artists, "artistLabels", "artistData")?;
    insert_chart(&mut values, &stats.genre_distribution, "genreLabels", "genreData")?;
    insert_chart(&mut values, &stats.top_albums, "albumLabels", "albumData")?;
    insert_chart(&mut values, &stats.monthly_pattern, "monthLabels", "monthData")?;

    Ok(values)
}

fn insert_ranked(
    values: &mut HashMap<&'static str, String>,
    item: &RankedItem,
    name_key: &'static str,
    sub_name_key: Option<&'static str>,
    count_key: &'static str,
) {
    values.insert(name_key, html_encode(&item.name));
    if let Some(key) = sub_name_key {
        values.insert(key, html_encode_opt(item.sub_name.as_deref()));
    }
    values.insert(count_key, item.count.to_string());
}

fn insert_chart(
    values: &mut HashMap<&'static str, String>,
    items: &[ChartItem],
    labels_key: &'static str,
    data_key: &'static str,
) -> Result<()> {
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    let data: Vec<u64> = items.iter().map(|item| item.value.get()).collect();
    values.insert(labels_key, script_json(&labels)?);
    values.insert(data_key, script_json(&data)?);
    Ok(())
}

/// One table row per play.
fn song_rows(records: &[PlayRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                idx + 1,
                html_encode(&record.title),
                html_encode(&record.artist),
                html_encode(&record.album),
                html_encode(&record.genre),
                html_encode(&record.played_at),
                record.duration.to_track_length(),
            )
        })
        .collect()
}

/// Human readable listening time.
///
/// A day or more reads `"1.5 days (36 hours)"`, anything shorter
/// `"12.3 hours"`. Whole hours round half away from zero.
#[must_use]
pub fn format_total_duration(total_hours: f64, total_days: f64) -> String {
    if total_hours >= 24.0 {
        let whole_hours = total_hours.round();
        format!("{total_days:.1} days ({whole_hours:.0} hours)")
    } else {
        format!("{total_hours:.1} hours")
    }
}
