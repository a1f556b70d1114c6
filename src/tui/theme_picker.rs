//! Theme picker overlay.
//!
//! Lists the available themes with the active one checked. Enter and
//! Space both select (key activation parity with click), Esc cancels.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::Component;
use super::theme::{Theme, ThemeId};

/// Events emitted by the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePickerEvent {
    /// User selected a theme.
    Selected(ThemeId),
    /// User dismissed the picker without selecting.
    Cancelled,
}

/// Theme picker overlay state.
pub struct ThemePicker {
    /// Currently applied theme (shown checked).
    active: ThemeId,
    /// Cursor position in [`ThemeId::ALL`].
    cursor: usize,
}

impl ThemePicker {
    /// Creates a picker with the cursor on the active theme.
    #[must_use]
    pub fn new(active: ThemeId) -> Self {
        let cursor = ThemeId::ALL
            .iter()
            .position(|id| *id == active)
            .unwrap_or(0);
        Self { active, cursor }
    }

    fn cursor_theme(&self) -> ThemeId {
        ThemeId::ALL[self.cursor]
    }
}

impl Component for ThemePicker {
    type Event = ThemePickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < ThemeId::ALL.len() {
                    self.cursor += 1;
                }
                None
            }
            // Enter and Space activate identically.
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(ThemePickerEvent::Selected(self.cursor_theme()))
            }
            KeyCode::Esc => Some(ThemePickerEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = 30.min(area.width);
        let height = (ThemeId::ALL.len() as u16 + 2).min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let lines: Vec<Line> = ThemeId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let checked = if *id == self.active { "(x)" } else { "( )" };
                let style = if i == self.cursor {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                Line::from(Span::styled(format!("{checked} {}", id.label()), style))
            })
            .collect();

        f.render_widget(Clear, popup);
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Theme ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(paragraph, popup);
    }
}
