//! Display utilities for the terminal summary.
//!
//! After a report is written, the CLI prints a short recap of the year so
//! the user does not have to open the file to see the headline numbers.

use crate::report::format_total_duration;
use crate::stats::{RankedItem, Stats};

const LABEL_WIDTH: usize = 16;
const NAME_WIDTH: usize = 40;

/// Truncate a string to a maximum length, adding "..." if truncated.
///
/// Counts characters rather than bytes. For `max_len < 3`, truncates
/// without ellipsis since there's no room for "...".
///
/// # Examples
///
/// ```
/// use play_history::display::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("hello", 2), "he");
/// ```
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

/// Print a simple section header with dashes.
pub fn print_section_simple(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(30));
}

/// One summary line for a ranked item, e.g. `Song A - Artist X (3 plays)`.
#[must_use]
pub fn format_ranked(item: &RankedItem) -> String {
    let name = match item.sub_name.as_deref() {
        Some(sub_name) if !sub_name.is_empty() => format!("{} - {sub_name}", item.name),
        _ => item.name.clone(),
    };
    format!("{} ({} plays)", truncate(&name, NAME_WIDTH), item.count)
}

/// Build the summary lines for a year.
#[must_use]
pub fn summary_lines(song_count: usize, stats: &Stats) -> Vec<String> {
    let mut lines = vec![
        format!("{:<LABEL_WIDTH$}{song_count}", "Plays:"),
        format!(
            "{:<LABEL_WIDTH$}{} songs, {} artists, {} albums",
            "Unique:", stats.unique_songs, stats.unique_artists, stats.unique_albums
        ),
    ];

    if stats.has_duration() {
        lines.push(format!(
            "{:<LABEL_WIDTH$}{}",
            "Listening time:",
            format_total_duration(stats.total_hours, stats.total_days)
        ));
    }

    lines.push(format!("{:<LABEL_WIDTH$}{}", "Top song:", format_ranked(&stats.top_song)));
    lines.push(format!("{:<LABEL_WIDTH$}{}", "Top artist:", format_ranked(&stats.top_artist)));
    lines.push(format!("{:<LABEL_WIDTH$}{}", "Top album:", format_ranked(&stats.top_album)));

    if stats.has_genre() {
        lines.push(format!("{:<LABEL_WIDTH$}{}", "Top genre:", format_ranked(&stats.top_genre)));
    }

    lines
}

/// Print the year summary.
pub fn display_summary(song_count: usize, stats: &Stats) {
    print_section_simple("SUMMARY");
    for line in summary_lines(song_count, stats) {
        println!("  {line}");
    }
}
