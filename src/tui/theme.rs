//! Theme system for the rendered page.
//!
//! The page ships a small set of named themes. One identifier is applied
//! as the page-level display attribute (here: the palette the renderer
//! uses) and persisted through [`crate::config::Config`] with a 365-day
//! expiry. "win95" is the default when nothing valid is persisted.

use ratatui::style::Color;

/// Theme identifier, round-tripped through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeId {
    /// Retro gray-and-teal look; the page default.
    #[default]
    Win95,
    /// Dark palette for dark terminals.
    Dark,
    /// Light palette for light terminals.
    Light,
    /// High-contrast dark blue palette.
    Midnight,
}

impl ThemeId {
    /// Every selectable theme, in picker order.
    pub const ALL: [Self; 4] = [Self::Win95, Self::Dark, Self::Light, Self::Midnight];

    /// The identifier string stored in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win95 => "win95",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Midnight => "midnight",
        }
    }

    /// Human-readable name for the theme picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win95 => "Windows 95",
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Midnight => "Midnight",
        }
    }

    /// Parses a persisted identifier. Unknown identifiers yield `None`
    /// so callers fall back to the default.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

/// Semantic color palette consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for the selected entry and pressed controls
    pub accent: Color,
    /// Color for the favorite glyph when pressed
    pub favorite: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for separators, hints, and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
}

impl Theme {
    /// Palette for a theme identifier.
    #[must_use]
    pub const fn from_id(id: ThemeId) -> Self {
        match id {
            ThemeId::Win95 => Self::win95(),
            ThemeId::Dark => Self::dark(),
            ThemeId::Light => Self::light(),
            ThemeId::Midnight => Self::midnight(),
        }
    }

    /// Classic gray chrome on a teal desktop.
    #[must_use]
    pub const fn win95() -> Self {
        Self {
            primary: Color::Rgb(192, 192, 192),
            accent: Color::Rgb(0, 0, 128),
            favorite: Color::Rgb(255, 0, 0),
            text: Color::Rgb(0, 0, 0),
            text_muted: Color::Rgb(96, 96, 96),
            background: Color::Rgb(0, 128, 128),
            highlight_bg: Color::Rgb(192, 192, 192),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            favorite: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            highlight_bg: Color::DarkGray,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(176, 100, 0),
            favorite: Color::Rgb(200, 0, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            highlight_bg: Color::Rgb(220, 220, 220),
        }
    }

    #[must_use]
    pub const fn midnight() -> Self {
        Self {
            primary: Color::Rgb(100, 150, 255),
            accent: Color::Rgb(255, 200, 80),
            favorite: Color::Rgb(255, 90, 120),
            text: Color::Rgb(220, 230, 255),
            text_muted: Color::Rgb(90, 100, 140),
            background: Color::Rgb(10, 15, 40),
            highlight_bg: Color::Rgb(30, 40, 80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_round_trip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_unknown_identifier_parses_to_none() {
        assert_eq!(ThemeId::parse("solarized"), None);
        assert_eq!(ThemeId::parse(""), None);
    }

    #[test]
    fn test_default_theme_is_win95() {
        assert_eq!(ThemeId::default(), ThemeId::Win95);
    }
}
