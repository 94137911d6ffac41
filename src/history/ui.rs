//! Text formatting for the history list panel.

use super::models::HistoryEntry;
use chrono::{DateTime, Utc};

/// Formats the visible entries for the list panel, one line each.
pub fn format_history_list(entries: &[HistoryEntry]) -> Vec<String> {
    entries.iter().map(format_history_entry).collect()
}

/// Formats a single entry as `"#id METHOD URL (timestamp)"`.
///
/// The id is part of the line so the user can address the entry in replay
/// and delete commands.
pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "#{} {} {} ({})",
        entry.id,
        entry.method.as_str(),
        entry.url,
        format_timestamp(&entry.timestamp)
    )
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
