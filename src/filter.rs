//! Favorites filtering over the events page.
//!
//! The engine owns the one piece of process-wide UI state the page has:
//! whether the favorites-only filter is active. It starts off on every
//! run and is never persisted. From that flag plus the favorites store it
//! derives a [`FilterView`] — which entries and month separators are
//! hidden, the count line and the empty-state banner. Recomputing is
//! idempotent and safe to call redundantly, so callers invoke it after
//! every favorites mutation without checking whether anything changed.

use std::collections::BTreeSet;

use crate::constants::EMPTY_STATE_MESSAGE;
use crate::favorites::FavoriteStore;
use crate::models::EventsPage;

/// Derived visibility and text state for one recompute pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    /// UIDs of entries hidden under the current mode.
    pub hidden: BTreeSet<String>,
    /// Month keys whose separators are hidden under the current mode.
    pub hidden_months: BTreeSet<String>,
    /// Number of visible entries.
    pub visible: usize,
    /// Total number of entries on the page.
    pub total: usize,
    /// Count line text ("5 events" / "2 favorites of 5 events").
    pub count_text: String,
    /// Empty-state banner text, when it should be shown.
    pub empty_state: Option<&'static str>,
}

impl FilterView {
    /// Whether the entry with `uid` is visible.
    #[must_use]
    pub fn is_visible(&self, uid: &str) -> bool {
        !self.hidden.contains(uid)
    }

    /// Whether the separator for `month_key` is visible.
    #[must_use]
    pub fn is_month_visible(&self, month_key: &str) -> bool {
        !self.hidden_months.contains(month_key)
    }
}

/// Filter state machine: all-events vs. favorites-only.
///
/// Transitions happen only through [`FilterEngine::toggle_mode`]; a fresh
/// engine always starts in all-events mode.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    favorites_only: bool,
}

impl FilterEngine {
    /// Creates an engine in all-events mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            favorites_only: false,
        }
    }

    /// Whether the favorites-only filter is active.
    #[must_use]
    pub const fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    /// Flips the filter mode and recomputes immediately.
    pub fn toggle_mode(&mut self, page: &EventsPage, store: &FavoriteStore) -> FilterView {
        self.favorites_only = !self.favorites_only;
        self.recompute(page, store)
    }

    /// Derives the visible/hidden partition, count text and empty-state
    /// banner for the current mode and favorites set.
    #[must_use]
    pub fn recompute(&self, page: &EventsPage, store: &FavoriteStore) -> FilterView {
        let favorites = store.all();
        let mut view = FilterView {
            total: page.total(),
            ..FilterView::default()
        };

        let mut visible_months: BTreeSet<&str> = BTreeSet::new();
        for entry in &page.events {
            if self.favorites_only && !favorites.contains(&entry.uid) {
                view.hidden.insert(entry.uid.clone());
            } else {
                view.visible += 1;
                if !entry.month_key.is_empty() {
                    visible_months.insert(entry.month_key.as_str());
                }
            }
        }

        for group in page.month_groups() {
            if self.favorites_only && !visible_months.contains(group.key.as_str()) {
                view.hidden_months.insert(group.key);
            }
        }

        view.count_text = count_text(self.favorites_only, view.visible, view.total);
        if self.favorites_only && view.visible == 0 {
            view.empty_state = Some(EMPTY_STATE_MESSAGE);
        }

        view
    }
}

/// Count line text for the current mode.
///
/// The "of N events" suffix is always plural, matching the page contract.
#[must_use]
pub fn count_text(favorites_only: bool, visible: usize, total: usize) -> String {
    if favorites_only {
        format!(
            "{visible} favorite{} of {total} events",
            if visible == 1 { "" } else { "s" }
        )
    } else {
        format!("{total} event{}", if total == 1 { "" } else { "s" })
    }
}
