//! Centralized shortcut and action system.
//!
//! This module provides a single dispatch table from key events to
//! application actions, keyed by UI context. Handlers look up the
//! incoming key instead of binding handlers to individual widgets, so
//! anything that appears on screen later is covered without re-binding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    JumpToFirst,
    JumpToLast,

    // === FAVORITES ===
    ToggleFavorite,
    ToggleFavoritesOnly,

    // === LINKS ===
    CopyEventLink,

    // === THEME ===
    OpenThemePicker,

    // === GENERAL ===
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the
/// application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToFirst);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::JumpToLast);

        // === FAVORITES ===
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleFavorite);
        self.register(ctx, K::Char('f'), M::NONE, Action::ToggleFavorite);
        self.register(ctx, K::Char('F'), M::SHIFT, Action::ToggleFavoritesOnly);
        self.register(ctx, K::Tab, M::NONE, Action::ToggleFavoritesOnly);

        // === LINKS ===
        self.register(ctx, K::Char('c'), M::NONE, Action::CopyEventLink);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyEventLink);

        // === THEME ===
        self.register(ctx, K::Char('t'), M::NONE, Action::OpenThemePicker);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a single shortcut.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(
            (context.to_string(), KeyBinding::new(code, modifiers)),
            action,
        );
    }

    /// Look up the action for a key event in the given context.
    #[must_use]
    pub fn lookup(&self, context: &str, key: KeyEvent) -> Option<Action> {
        self.bindings
            .get(&(context.to_string(), KeyBinding::from_event(key)))
            .copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_lookup_main_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::ToggleFavorite)
        );
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Some(Action::ToggleFavoritesOnly)
        );
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_lookup_unknown_key_is_none() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_lookup_unknown_context_is_none() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup("nope", key(KeyCode::Char('q'), KeyModifiers::NONE)),
            None
        );
    }
}
