//! Integration tests for theme persistence and expiry.

use eventmark::config::Config;
use eventmark::tui::ThemeId;
use tempfile::TempDir;

#[test]
fn test_theme_round_trips_through_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::new();
    config.set_theme("midnight");
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.effective_theme(), Some("midnight"));
    assert_eq!(
        loaded.effective_theme().and_then(ThemeId::parse),
        Some(ThemeId::Midnight)
    );
}

#[test]
fn test_missing_config_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::new());
    assert_eq!(loaded.effective_theme(), None);
}

#[test]
fn test_corrupt_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ui = not toml").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_expired_theme_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    // A selection stamped well past the TTL.
    std::fs::write(
        &path,
        "[ui]\ntheme = \"dark\"\ntheme_saved_at = \"2020-01-01T00:00:00Z\"\n",
    )
    .unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.effective_theme(), None);
    let id = loaded
        .effective_theme()
        .and_then(ThemeId::parse)
        .unwrap_or_default();
    assert_eq!(id, ThemeId::Win95);
}

#[test]
fn test_unknown_persisted_theme_falls_back_to_default() {
    let mut config = Config::new();
    config.set_theme("solarized");
    let id = config
        .effective_theme()
        .and_then(ThemeId::parse)
        .unwrap_or_default();
    assert_eq!(id, ThemeId::Win95);
}
