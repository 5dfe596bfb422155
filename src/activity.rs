use tracing::{debug, info};

use crate::loader::LogEntry;
use crate::stats::FrequencyTable;

/// Counts cookies whose timestamp contains `target_date`.
///
/// This is plain substring containment, not a calendar comparison, so
/// `2018-12-09` matches wherever it appears in the timestamp.
pub fn count_cookies(entries: &[LogEntry], target_date: &str) -> FrequencyTable {
    info!(action = "start", component = "activity_counter", target_date, "Filtering and counting cookies");

    let mut table = FrequencyTable::new();
    for entry in entries
        .iter()
        .filter(|entry| entry.timestamp.contains(target_date))
    {
        table.record(&entry.cookie);
    }

    let counts: Vec<_> = table.iter().collect();
    debug!(
        action = "counted",
        component = "activity_counter",
        counts = ?counts,
        "Counted cookies"
    );
    table
}

/// Returns the cookies seen most often on `target_date`, ties in first-seen
/// order. An empty result means nothing matched the date.
pub fn find_most_active(entries: &[LogEntry], target_date: &str) -> Vec<String> {
    let table = count_cookies(entries, target_date);
    if table.is_empty() {
        info!(action = "complete", component = "activity_counter", target_date, "No cookies found for the given date");
        return Vec::new();
    }

    let most_active = table.leaders();
    info!(
        action = "complete",
        component = "activity_counter",
        max_count = table.max_count().unwrap_or_default(),
        most_active = ?most_active,
        "Most active cookies"
    );
    most_active
}
