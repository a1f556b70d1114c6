//! Status bar widget for transient messages and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the active transient message if one is
    /// showing, key hints otherwise.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines = vec![if state.status_message.is_empty() {
            Self::hints_line(state, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.accent),
            ))
        }];

        // Selected entry's description, truncated to fit.
        if let Some(desc) = state
            .selected_entry()
            .and_then(|entry| entry.description.as_deref())
        {
            let truncated = if desc.chars().count() > 70 {
                let head: String = desc.chars().take(67).collect();
                format!("{head}...")
            } else {
                desc.to_string()
            };
            lines.push(Line::from(vec![
                Span::styled("Note: ", Style::default().fg(theme.accent)),
                Span::styled(truncated, Style::default().fg(theme.text)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        // The favorite hint carries the control's accessible label.
        let favorite_hint = state
            .selected_face()
            .map_or("favorite", |face| face.label);
        let filter_hint = if state.filter.favorites_only() {
            "F all events"
        } else {
            "F favorites only"
        };
        let hints = format!(
            "\u{2191}/\u{2193} navigate | Space {favorite_hint} | {filter_hint} | c copy link | t theme | q quit"
        );
        Line::from(Span::styled(hints, Style::default().fg(theme.text_muted)))
    }
}
