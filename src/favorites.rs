//! Persistent favorites store.
//!
//! Favorited event UIDs live in one JSON file (a serialized list of
//! strings) under the application config directory. The store is read
//! fresh on every query and written back immediately on every toggle, so
//! there is no in-memory copy to go stale. Every failure mode — missing
//! file, unreadable file, malformed JSON, failed write — degrades to
//! empty-set semantics rather than surfacing an error: the store augments
//! a page that remains usable without it.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::FAVORITES_FILE_NAME;

/// Durable set of favorited event UIDs.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    path: PathBuf,
}

impl FavoriteStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store backed by the default favorites file in the
    /// application config directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(Config::app_dir()?.join(FAVORITES_FILE_NAME)))
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads the full set of favorited UIDs.
    ///
    /// Reads the backing file fresh on every call. Missing, unreadable or
    /// malformed data yields the empty set; this never fails.
    #[must_use]
    pub fn all(&self) -> BTreeSet<String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .map(|list| list.into_iter().collect())
            .unwrap_or_default()
    }

    /// Whether `uid` is currently favorited.
    #[must_use]
    pub fn contains(&self, uid: &str) -> bool {
        self.all().contains(uid)
    }

    /// Adds `uid` if absent, removes it if present, and persists the
    /// updated set. Returns true iff `uid` is now favorited.
    ///
    /// A failed write is swallowed and the returned boolean still reflects
    /// the attempted change, so the UI can momentarily diverge from disk
    /// when storage is unavailable. Known limitation, kept deliberately.
    pub fn toggle(&self, uid: &str) -> bool {
        let mut favorites = self.all();
        let now_favorited = if favorites.contains(uid) {
            favorites.remove(uid);
            false
        } else {
            favorites.insert(uid.to_string());
            true
        };
        self.persist(&favorites);
        now_favorited
    }

    fn persist(&self, favorites: &BTreeSet<String>) {
        let list: Vec<&String> = favorites.iter().collect();
        let Ok(serialized) = serde_json::to_string(&list) else {
            return;
        };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&self.path, serialized);
    }
}
