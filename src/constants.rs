//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, storage file names, and the literal
//! strings the UI is contractually required to display.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "EventMark";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "eventmark";

/// Directory name under the platform config dir holding config and favorites.
pub const APP_DIR_NAME: &str = "EventMark";

/// File name of the persisted favorites list (the "storage key").
pub const FAVORITES_FILE_NAME: &str = "favorites.json";

/// Accessible label for a pressed (favorited) favorite control.
pub const LABEL_REMOVE_FAVORITE: &str = "Remove from favorites";

/// Accessible label for an unpressed favorite control.
pub const LABEL_ADD_FAVORITE: &str = "Add to favorites";

/// Glyph shown on a pressed favorite control.
pub const GLYPH_FAVORITE_ON: char = '\u{2665}'; // ♥

/// Glyph shown on an unpressed favorite control.
pub const GLYPH_FAVORITE_OFF: char = '\u{2661}'; // ♡

/// Banner text shown when the favorites-only view has nothing to show.
pub const EMPTY_STATE_MESSAGE: &str =
    "No favorites yet. Click the \u{2661} on events to add them.";

/// How long the "Link copied" acknowledgment stays on screen.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// How long a persisted theme selection is honored before falling back
/// to the default theme.
pub const THEME_TTL_DAYS: i64 = 365;
