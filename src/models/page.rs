//! The events page export: a fixed, ordered list of entries plus the
//! month separators derived from it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::EventEntry;

/// A month separator on the page.
///
/// Separators are derived from the entry list, not stored: consecutive
/// entries sharing a month key form one group. Visibility under the
/// favorites filter is derived elsewhere and never written back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// Month key in `YYYY-MM` form.
    pub key: String,
    /// Human-readable label ("August 2026"), falling back to the raw key.
    pub label: String,
    /// Number of entries in the group.
    pub entry_count: usize,
}

/// The server-generated events page, loaded from its JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsPage {
    /// Site/page title.
    pub title: String,
    /// Public URL of the rendered page; base for copied event links.
    #[serde(default)]
    pub page_url: Option<String>,
    /// Entries in page order (the generator sorts them by date).
    #[serde(default)]
    pub events: Vec<EventEntry>,
}

impl EventsPage {
    /// Loads a page export from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page export: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse page export: {}", path.display()))
    }

    /// Total number of entries on the page.
    #[must_use]
    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// Derives the month separators by grouping consecutive entries on
    /// their month key. Entries with an empty month key belong to no group.
    #[must_use]
    pub fn month_groups(&self) -> Vec<MonthGroup> {
        let mut groups: Vec<MonthGroup> = Vec::new();

        for entry in &self.events {
            if entry.month_key.is_empty() {
                continue;
            }
            match groups.last_mut() {
                Some(group) if group.key == entry.month_key => {
                    group.entry_count += 1;
                }
                _ => groups.push(MonthGroup {
                    key: entry.month_key.clone(),
                    label: month_label(&entry.month_key),
                    entry_count: 1,
                }),
            }
        }

        groups
    }
}

/// Converts a `YYYY-MM` key to a human-readable month label.
///
/// Keys that do not parse are returned unchanged.
#[must_use]
pub fn month_label(month_key: &str) -> String {
    let Some((year, month)) = month_key.split_once('-') else {
        return month_key.to_string();
    };
    let parsed = year
        .parse::<i32>()
        .ok()
        .zip(month.parse::<u32>().ok())
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));
    match parsed {
        Some(date) => date.format("%B %Y").to_string(),
        None => month_key.to_string(),
    }
}
