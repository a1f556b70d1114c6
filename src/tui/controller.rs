//! Favorite button controller.
//!
//! Binds the per-entry favorite controls to the favorites store: faces
//! are initialized from the store on startup, and activating a control
//! toggles the store, updates that control's face, and pokes the filter
//! recompute capability when one is registered. The capability is an
//! injected optional reference; running without a filter on screen is
//! not an error.

use std::collections::HashMap;

use crate::constants::{
    GLYPH_FAVORITE_OFF, GLYPH_FAVORITE_ON, LABEL_ADD_FAVORITE, LABEL_REMOVE_FAVORITE,
};
use crate::favorites::FavoriteStore;
use crate::models::EventsPage;

/// Visual state of one favorite control.
///
/// A face is a pure function of the pressed boolean; nothing else feeds
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    /// Pressed state (favorited).
    pub pressed: bool,
    /// Accessible label.
    pub label: &'static str,
    /// Heart glyph: filled when pressed, hollow otherwise.
    pub glyph: char,
}

impl ButtonFace {
    /// The face for a pressed state.
    #[must_use]
    pub const fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self {
                pressed: true,
                label: LABEL_REMOVE_FAVORITE,
                glyph: GLYPH_FAVORITE_ON,
            }
        } else {
            Self {
                pressed: false,
                label: LABEL_ADD_FAVORITE,
                glyph: GLYPH_FAVORITE_OFF,
            }
        }
    }
}

/// Controller wiring favorite controls to the store.
pub struct FavoriteButtonController<'a> {
    store: &'a FavoriteStore,
}

impl<'a> FavoriteButtonController<'a> {
    /// Creates a controller over the given store.
    #[must_use]
    pub const fn new(store: &'a FavoriteStore) -> Self {
        Self { store }
    }

    /// Builds the initial face for every favorite control on the page,
    /// reflecting current store contents.
    #[must_use]
    pub fn initialize(&self, page: &EventsPage) -> HashMap<String, ButtonFace> {
        let favorites = self.store.all();
        page.events
            .iter()
            .map(|entry| {
                let face = ButtonFace::from_pressed(favorites.contains(&entry.uid));
                (entry.uid.clone(), face)
            })
            .collect()
    }

    /// Handles activation of a favorite control.
    ///
    /// A control without a UID is ignored. Otherwise the store is
    /// toggled, the control's face updated from the result, and the
    /// recompute capability invoked if registered. Returns the new
    /// pressed state when a toggle happened.
    pub fn activate(
        &self,
        uid: Option<&str>,
        faces: &mut HashMap<String, ButtonFace>,
        recompute: Option<&mut dyn FnMut()>,
    ) -> Option<bool> {
        let uid = uid?;
        let pressed = self.store.toggle(uid);
        faces.insert(uid.to_string(), ButtonFace::from_pressed(pressed));
        if let Some(recompute) = recompute {
            recompute();
        }
        Some(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page_with(uids: &[&str]) -> EventsPage {
        let events = uids
            .iter()
            .map(|uid| {
                serde_json::from_str(&format!(
                    r#"{{"uid": "{uid}", "summary": "{uid}", "start_date": "2026-08-25"}}"#
                ))
                .unwrap()
            })
            .collect();
        EventsPage {
            title: "Events".to_string(),
            page_url: None,
            events,
        }
    }

    #[test]
    fn test_button_face_is_total() {
        let on = ButtonFace::from_pressed(true);
        assert_eq!(on.label, "Remove from favorites");
        assert_eq!(on.glyph, '\u{2665}');

        let off = ButtonFace::from_pressed(false);
        assert_eq!(off.label, "Add to favorites");
        assert_eq!(off.glyph, '\u{2661}');
    }

    #[test]
    fn test_initialize_reflects_store() {
        let dir = TempDir::new().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        store.toggle("ev-2");

        let controller = FavoriteButtonController::new(&store);
        let faces = controller.initialize(&page_with(&["ev-1", "ev-2"]));

        assert!(!faces["ev-1"].pressed);
        assert!(faces["ev-2"].pressed);
    }

    #[test]
    fn test_activate_without_uid_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        let controller = FavoriteButtonController::new(&store);
        let mut faces = HashMap::new();
        let mut called = false;

        let result = controller.activate(None, &mut faces, Some(&mut || called = true));

        assert_eq!(result, None);
        assert!(faces.is_empty());
        assert!(!called);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_activate_toggles_and_recomputes() {
        let dir = TempDir::new().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        let controller = FavoriteButtonController::new(&store);
        let mut faces = controller.initialize(&page_with(&["ev-1"]));
        let mut calls = 0;

        let result = controller.activate(Some("ev-1"), &mut faces, Some(&mut || calls += 1));
        assert_eq!(result, Some(true));
        assert!(faces["ev-1"].pressed);
        assert_eq!(faces["ev-1"].label, "Remove from favorites");
        assert_eq!(calls, 1);

        let result = controller.activate(Some("ev-1"), &mut faces, Some(&mut || calls += 1));
        assert_eq!(result, Some(false));
        assert!(!faces["ev-1"].pressed);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_activate_without_recompute_capability() {
        let dir = TempDir::new().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        let controller = FavoriteButtonController::new(&store);
        let mut faces = HashMap::new();

        // No capability registered; must not be treated as an error.
        assert_eq!(controller.activate(Some("ev-1"), &mut faces, None), Some(true));
        assert!(store.contains("ev-1"));
    }

    #[test]
    fn test_activate_handles_control_added_after_initialize() {
        let dir = TempDir::new().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        let controller = FavoriteButtonController::new(&store);
        // Initialized against an empty page; a control appears later.
        let mut faces = controller.initialize(&page_with(&[]));

        assert_eq!(controller.activate(Some("late-1"), &mut faces, None), Some(true));
        assert!(faces["late-1"].pressed);
    }
}
