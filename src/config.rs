//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in
//! TOML format with platform-specific directory resolution. The one
//! setting that matters is the persisted theme selection, which carries
//! cookie-like semantics: it is stamped when saved and honored for 365
//! days, after which it is treated as absent and the default theme
//! applies again.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, THEME_TTL_DAYS};

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Persisted theme identifier (e.g. "win95", "dark").
    #[serde(default)]
    pub theme: Option<String>,
    /// When the theme was last selected; selections older than
    /// [`THEME_TTL_DAYS`] are ignored on load.
    #[serde(default)]
    pub theme_saved_at: Option<DateTime<Utc>>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/EventMark/config.toml`
/// - macOS: `~/Library/Application Support/EventMark/config.toml`
/// - Windows: `%APPDATA%\EventMark\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific application directory path.
    pub fn app_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);
        Ok(dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields default configuration; an unreadable or
    /// unparseable file is an error with context.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves configuration to the default config file, creating the
    /// application directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The persisted theme identifier, if one was saved and has not
    /// expired. Callers fall back to the default theme on `None`.
    #[must_use]
    pub fn effective_theme(&self) -> Option<&str> {
        self.effective_theme_at(Utc::now())
    }

    /// Expiry check against an explicit clock.
    #[must_use]
    pub fn effective_theme_at(&self, now: DateTime<Utc>) -> Option<&str> {
        let theme = self.ui.theme.as_deref()?;
        let saved_at = self.ui.theme_saved_at?;
        if now.signed_duration_since(saved_at) > Duration::days(THEME_TTL_DAYS) {
            return None;
        }
        Some(theme)
    }

    /// Records a theme selection, stamping it with the current time.
    pub fn set_theme(&mut self, theme: &str) {
        self.ui.theme = Some(theme.to_string());
        self.ui.theme_saved_at = Some(Utc::now());
    }
}
