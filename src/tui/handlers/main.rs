//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::constants::COPY_FEEDBACK_DURATION;
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::controller::FavoriteButtonController;
use crate::tui::linkcopy;
use crate::tui::theme_picker::ThemePicker;
use crate::tui::AppState;

/// Handle input for the main UI.
///
/// Returns `Ok(true)` when the user quit.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup("main", key) {
        dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Execute an action against the application state.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::NavigateUp => {
            state.selected = state.selected.saturating_sub(1);
        }
        Action::NavigateDown => {
            state.selected += 1;
            state.clamp_selection();
        }
        Action::JumpToFirst => {
            state.selected = 0;
        }
        Action::JumpToLast => {
            state.selected = state.visible_entries().len().saturating_sub(1);
        }
        Action::ToggleFavorite => toggle_selected_favorite(state),
        Action::ToggleFavoritesOnly => {
            state.view = state.filter.toggle_mode(&state.page, &state.store);
            state.clamp_selection();
        }
        Action::CopyEventLink => copy_selected_link(state),
        Action::OpenThemePicker => {
            state.theme_picker = Some(ThemePicker::new(state.theme_id));
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Toggle the favorite control of the selected entry.
///
/// The controller receives the filter recompute hook as an optional
/// capability; here it is always present, and recompute runs after every
/// successful toggle.
fn toggle_selected_favorite(state: &mut AppState) {
    let uid = state.selected_entry().map(|entry| entry.uid.clone());

    let AppState {
        ref page,
        ref store,
        ref filter,
        ref mut view,
        ref mut faces,
        ..
    } = *state;

    let controller = FavoriteButtonController::new(store);
    let mut recompute = || *view = filter.recompute(page, store);
    controller.activate(uid.as_deref(), faces, Some(&mut recompute));

    state.clamp_selection();
}

/// Copy a deep link to the selected entry. An entry without an anchor id
/// is skipped silently; clipboard failures are swallowed.
fn copy_selected_link(state: &mut AppState) {
    let Some(anchor_id) = state.selected_entry().map(|entry| entry.anchor_id.clone()) else {
        return;
    };
    if anchor_id.is_empty() {
        return;
    }
    let url = linkcopy::event_url(state.page.page_url.as_deref(), &anchor_id);
    if linkcopy::copy_to_clipboard(&url).is_ok() {
        state.set_status("Link copied", Some(COPY_FEEDBACK_DURATION));
    }
}
