//! Theme picker input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::component::Component;
use crate::tui::theme_picker::ThemePickerEvent;
use crate::tui::AppState;

/// Route input to the theme picker overlay and apply its outcome.
pub fn handle_theme_picker_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(picker) = state.theme_picker.as_mut() else {
        return Ok(false);
    };

    match picker.handle_input(key) {
        Some(ThemePickerEvent::Selected(id)) => {
            state.theme_picker = None;
            state.apply_theme(id);
        }
        Some(ThemePickerEvent::Cancelled) => {
            state.theme_picker = None;
        }
        None => {}
    }

    Ok(false)
}
