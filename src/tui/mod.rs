//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod component;
pub mod controller;
pub mod handlers;
pub mod linkcopy;
pub mod status_bar;
pub mod theme;
pub mod theme_picker;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame, Terminal,
};
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::favorites::FavoriteStore;
use crate::filter::{FilterEngine, FilterView};
use crate::models::{EventEntry, EventsPage};

// Re-export TUI components
pub use component::Component;
pub use controller::{ButtonFace, FavoriteButtonController};
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeId};
pub use theme_picker::{ThemePicker, ThemePickerEvent};

/// Central application state for the TUI.
pub struct AppState {
    /// The loaded page export (read-only).
    pub page: EventsPage,
    /// Favorites store.
    pub store: FavoriteStore,
    /// Filter state machine.
    pub filter: FilterEngine,
    /// Derived visibility/count state from the last recompute.
    pub view: FilterView,
    /// Face of every favorite control, keyed by entry UID.
    pub faces: HashMap<String, ButtonFace>,
    /// Application configuration (theme persistence).
    pub config: Config,
    /// Applied theme identifier.
    pub theme_id: ThemeId,
    /// Palette for the applied theme.
    pub theme: Theme,
    /// Selection index among currently visible entries.
    pub selected: usize,
    /// Theme picker overlay, when open.
    pub theme_picker: Option<ThemePicker>,
    /// Transient status message ("Link copied").
    pub status_message: String,
    /// When the status message stops showing, if it is transient.
    pub status_expires_at: Option<Instant>,
    /// Set when the user quit.
    pub should_quit: bool,
}

impl AppState {
    /// Builds the initial state: button faces from the store, an initial
    /// (all-events) filter pass, and the persisted or overridden theme.
    #[must_use]
    pub fn new(
        page: EventsPage,
        store: FavoriteStore,
        config: Config,
        theme_override: Option<ThemeId>,
    ) -> Self {
        let theme_id = theme_override
            .or_else(|| config.effective_theme().and_then(ThemeId::parse))
            .unwrap_or_default();

        let filter = FilterEngine::new();
        // Redundant on a fresh start (nothing is hidden yet) but recompute
        // is idempotent, and this seeds the count line.
        let view = filter.recompute(&page, &store);
        let faces = FavoriteButtonController::new(&store).initialize(&page);

        Self {
            page,
            store,
            filter,
            view,
            faces,
            config,
            theme_id,
            theme: Theme::from_id(theme_id),
            selected: 0,
            theme_picker: None,
            status_message: String::new(),
            status_expires_at: None,
            should_quit: false,
        }
    }

    /// Entries visible under the current filter view, in page order.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&EventEntry> {
        self.page
            .events
            .iter()
            .filter(|entry| self.view.is_visible(&entry.uid))
            .collect()
    }

    /// The currently selected entry, if any is visible.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&EventEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    /// Face of the selected entry's favorite control.
    #[must_use]
    pub fn selected_face(&self) -> Option<ButtonFace> {
        let entry = self.selected_entry()?;
        Some(
            self.faces
                .get(&entry.uid)
                .copied()
                .unwrap_or_else(|| ButtonFace::from_pressed(false)),
        )
    }

    /// Keeps the selection inside the visible range after a recompute.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Shows a status message, transient when a duration is given.
    pub fn set_status(&mut self, message: impl Into<String>, ttl: Option<Duration>) {
        self.status_message = message.into();
        self.status_expires_at = ttl.map(|ttl| Instant::now() + ttl);
    }

    /// Clears the status message once its time is up.
    pub fn tick(&mut self) {
        if let Some(expires_at) = self.status_expires_at {
            if Instant::now() >= expires_at {
                self.status_message.clear();
                self.status_expires_at = None;
            }
        }
    }

    /// Applies a theme and persists the selection.
    pub fn apply_theme(&mut self, id: ThemeId) {
        self.theme_id = id;
        self.theme = Theme::from_id(id);
        self.config.set_theme(id.as_str());
        if let Err(e) = self.config.save() {
            self.set_status(format!("Failed to save theme: {e}"), None);
        }
    }
}

/// Set up the terminal for TUI mode.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.tick();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route a key event to the active context's handler.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.theme_picker.is_some() {
        handlers::handle_theme_picker_input(state, key)
    } else {
        handlers::handle_main_input(state, key)
    }
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + count line
            Constraint::Min(1),    // event list / empty state
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], state, theme);

    if let Some(message) = state.view.empty_state {
        render_empty_state(f, chunks[1], message, theme);
    } else {
        render_event_list(f, chunks[1], state, theme);
    }

    StatusBar::render(f, chunks[2], state, theme);

    if let Some(picker) = &state.theme_picker {
        picker.render(f, f.area(), theme);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title_line = Line::from(vec![
        Span::styled(
            state.page.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", crate::constants::APP_NAME),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    // The filter toggle control, pressed state included.
    let toggle_style = if state.filter.favorites_only() {
        Style::default()
            .fg(theme.favorite)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let count_line = Line::from(vec![
        Span::styled(state.view.count_text.clone(), Style::default().fg(theme.text)),
        Span::raw("   "),
        Span::styled("[\u{2665} favorites only]", toggle_style),
    ]);

    f.render_widget(Paragraph::new(vec![title_line, count_line]), area);
}

fn render_empty_state(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.text),
    )))
    .alignment(ratatui::layout::Alignment::Center)
    .wrap(Wrap { trim: true });

    // Drop the banner a third of the way down the list area.
    let y_offset = area.height / 3;
    let banner_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: area.height.saturating_sub(y_offset).min(3),
    };
    f.render_widget(banner, banner_area);
}

fn render_event_list(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    let mut visible_index = 0;
    let mut current_month: Option<&str> = None;

    for entry in &state.page.events {
        if !state.view.is_visible(&entry.uid) {
            continue;
        }

        if !entry.month_key.is_empty()
            && current_month != Some(entry.month_key.as_str())
            && state.view.is_month_visible(&entry.month_key)
        {
            current_month = Some(entry.month_key.as_str());
            lines.push(Line::from(Span::styled(
                format!("\u{2500}\u{2500} {} \u{2500}\u{2500}", crate::models::page::month_label(&entry.month_key)),
                Style::default().fg(theme.text_muted),
            )));
        }

        let is_selected = visible_index == state.selected;
        if is_selected {
            selected_line = lines.len();
        }

        let face = state
            .faces
            .get(&entry.uid)
            .copied()
            .unwrap_or_else(|| ButtonFace::from_pressed(false));
        let glyph_style = if face.pressed {
            Style::default().fg(theme.favorite)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let line_style = if is_selected {
            Style::default().bg(theme.highlight_bg)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", face.glyph), glyph_style),
            Span::styled(entry.date_text(), Style::default().fg(theme.text_muted)),
            Span::raw("  "),
            Span::styled(
                entry.summary.clone(),
                Style::default().fg(if is_selected { theme.accent } else { theme.text }),
            ),
        ];
        if let Some(location) = &entry.location {
            spans.push(Span::styled(
                format!("  @ {location}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        lines.push(Line::from(spans).style(line_style));

        visible_index += 1;
    }

    // Keep the selected entry in view.
    let half = usize::from(area.height / 2);
    let scroll = selected_line.saturating_sub(half);
    #[allow(clippy::cast_possible_truncation)]
    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);
}
