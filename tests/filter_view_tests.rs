//! Integration tests for the filter engine against a realistic page.

use eventmark::favorites::FavoriteStore;
use eventmark::filter::{FilterEngine, FilterView};
use eventmark::models::{EventEntry, EventsPage};
use eventmark::tui::FavoriteButtonController;
use tempfile::TempDir;

fn entry(uid: &str, month_key: &str) -> EventEntry {
    serde_json::from_str(&format!(
        r#"{{"uid": "{uid}", "summary": "{uid}", "start_date": "{month_key}-05", "month_key": "{month_key}", "anchor_id": "{uid}"}}"#
    ))
    .unwrap()
}

/// Five events: three in August, two in September.
fn sample_page() -> EventsPage {
    EventsPage {
        title: "Town Events".to_string(),
        page_url: Some("https://example.com/events/".to_string()),
        events: vec![
            entry("aug-1", "2026-08"),
            entry("aug-2", "2026-08"),
            entry("aug-3", "2026-08"),
            entry("sep-1", "2026-09"),
            entry("sep-2", "2026-09"),
        ],
    }
}

fn store_in(dir: &TempDir) -> FavoriteStore {
    FavoriteStore::new(dir.path().join("favorites.json"))
}

#[test]
fn test_all_events_mode_shows_everything() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("aug-1");

    let engine = FilterEngine::new();
    let view = engine.recompute(&sample_page(), &store);

    assert_eq!(view.visible, 5);
    assert!(view.hidden.is_empty());
    assert!(view.hidden_months.is_empty());
    // Favorite state does not affect the all-events count text.
    assert_eq!(view.count_text, "5 events");
    assert_eq!(view.empty_state, None);
}

#[test]
fn test_two_of_five_favorites_scenario() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("aug-1");
    store.toggle("aug-3");

    let page = sample_page();
    let mut engine = FilterEngine::new();
    let view = engine.toggle_mode(&page, &store);

    assert!(engine.favorites_only());
    assert_eq!(view.visible, 2);
    assert!(view.is_visible("aug-1"));
    assert!(view.is_visible("aug-3"));
    assert!(!view.is_visible("aug-2"));
    assert!(!view.is_visible("sep-1"));
    assert!(!view.is_visible("sep-2"));
    assert_eq!(view.count_text, "2 favorites of 5 events");

    // Only the month with a favorited entry keeps its separator.
    assert!(view.is_month_visible("2026-08"));
    assert!(!view.is_month_visible("2026-09"));
    assert_eq!(view.empty_state, None);
}

#[test]
fn test_zero_favorites_boundary() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let page = sample_page();
    let mut engine = FilterEngine::new();
    let view = engine.toggle_mode(&page, &store);

    assert_eq!(view.visible, 0);
    assert_eq!(view.count_text, "0 favorites of 5 events");
    assert_eq!(
        view.empty_state,
        Some("No favorites yet. Click the \u{2661} on events to add them.")
    );
    assert!(!view.is_month_visible("2026-08"));
    assert!(!view.is_month_visible("2026-09"));
}

#[test]
fn test_recompute_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("sep-1");

    let page = sample_page();
    let mut engine = FilterEngine::new();
    engine.toggle_mode(&page, &store);

    let first = engine.recompute(&page, &store);
    let second = engine.recompute(&page, &store);
    assert_eq!(first, second);
}

#[test]
fn test_recompute_reads_store_fresh() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let page = sample_page();
    let mut engine = FilterEngine::new();
    let view = engine.toggle_mode(&page, &store);
    assert_eq!(view.visible, 0);

    // A mutation after the last recompute is picked up by the next one;
    // the engine holds no favorites cache.
    store.toggle("sep-2");
    let view = engine.recompute(&page, &store);
    assert_eq!(view.visible, 1);
    assert_eq!(view.count_text, "1 favorite of 5 events");
    assert!(view.is_month_visible("2026-09"));
    assert!(!view.is_month_visible("2026-08"));
}

#[test]
fn test_favorite_toggle_updates_view_through_controller() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let page = sample_page();
    let mut engine = FilterEngine::new();
    let mut view = engine.toggle_mode(&page, &store);
    assert_eq!(view.visible, 0);

    // Favoriting through the controller recomputes the view in place,
    // no reload involved.
    let controller = FavoriteButtonController::new(&store);
    let mut faces = controller.initialize(&page);
    {
        let mut recompute = || view = engine.recompute(&page, &store);
        let pressed = controller.activate(Some("aug-2"), &mut faces, Some(&mut recompute));
        assert_eq!(pressed, Some(true));
    }

    assert!(faces["aug-2"].pressed);
    assert_eq!(faces["aug-2"].label, "Remove from favorites");
    assert_eq!(faces["aug-2"].glyph, '\u{2665}');
    assert_eq!(view.visible, 1);
    assert_eq!(view.count_text, "1 favorite of 5 events");
    assert!(view.is_visible("aug-2"));
    assert!(view.is_month_visible("2026-08"));
    assert_eq!(view.empty_state, None);
}

#[test]
fn test_fresh_view_default_is_empty_partition() {
    let view = FilterView::default();
    assert!(view.is_visible("anything"));
    assert!(view.is_month_visible("2026-08"));
}

#[test]
fn test_toggling_mode_twice_returns_to_all_events() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let page = sample_page();
    let mut engine = FilterEngine::new();
    engine.toggle_mode(&page, &store);
    let view = engine.toggle_mode(&page, &store);

    assert!(!engine.favorites_only());
    assert_eq!(view.visible, 5);
    assert_eq!(view.count_text, "5 events");
    assert_eq!(view.empty_state, None);
}
