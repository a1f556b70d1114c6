//! A single event entry from the page export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One event entry as rendered on the events page.
///
/// Entries are read-only: the generator that produced the export decided
/// their content and order. The only state derived at runtime (visibility
/// under the current filter) lives outside this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    /// Stable identifier from the source feed; key for the favorites store.
    pub uid: String,
    /// Event title.
    pub summary: String,
    /// Longer description, if the feed provided one.
    #[serde(default)]
    pub description: Option<String>,
    /// Venue or location text.
    #[serde(default)]
    pub location: Option<String>,
    /// External URL for the event itself (not the page anchor).
    #[serde(default)]
    pub url: Option<String>,
    /// First day of the event.
    pub start_date: NaiveDate,
    /// Last day, for multi-day events.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the event is an all-day event (no meaningful time of day).
    #[serde(default = "default_all_day")]
    pub is_all_day: bool,
    /// Category tags from the feed.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Month grouping key in `YYYY-MM` form. May be empty in older
    /// exports; an entry without a month key simply never contributes
    /// to month-separator visibility.
    #[serde(default)]
    pub month_key: String,
    /// Anchor id used for deep links (`#event-{anchor_id}`).
    #[serde(default)]
    pub anchor_id: String,
    /// Pre-formatted date string for display.
    #[serde(default)]
    pub date_display: String,
    /// Duration in days (1 for single-day events).
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
}

const fn default_all_day() -> bool {
    true
}

const fn default_duration_days() -> u32 {
    1
}

impl EventEntry {
    /// The text shown for the entry's date, falling back to the raw start
    /// date when the export carries no pre-formatted display string.
    #[must_use]
    pub fn date_text(&self) -> String {
        if self.date_display.is_empty() {
            self.start_date.format("%b %-d, %Y").to_string()
        } else {
            self.date_display.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(uid: &str) -> String {
        format!(
            r#"{{"uid": "{uid}", "summary": "Concert", "start_date": "2026-08-25"}}"#
        )
    }

    #[test]
    fn test_minimal_entry_deserializes_with_defaults() {
        let entry: EventEntry = serde_json::from_str(&entry_json("ev-1")).unwrap();
        assert_eq!(entry.uid, "ev-1");
        assert!(entry.is_all_day);
        assert_eq!(entry.duration_days, 1);
        assert!(entry.month_key.is_empty());
        assert!(entry.categories.is_empty());
    }

    #[test]
    fn test_date_text_falls_back_to_start_date() {
        let entry: EventEntry = serde_json::from_str(&entry_json("ev-2")).unwrap();
        assert_eq!(entry.date_text(), "Aug 25, 2026");
    }

    #[test]
    fn test_date_text_prefers_display_string() {
        let mut entry: EventEntry = serde_json::from_str(&entry_json("ev-3")).unwrap();
        entry.date_display = "Tue, Aug 25".to_string();
        assert_eq!(entry.date_text(), "Tue, Aug 25");
    }
}
