//! Status bar widget for status messages and key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::HINTS;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.clone(), Style::default().fg(theme.text)),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            ))
        } else {
            Self::hints_line(theme)
        };

        let paragraph = Paragraph::new(vec![first, Self::position_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
        f.render_widget(paragraph, area);
    }

    fn hints_line(theme: &Theme) -> Line<'static> {
        let mut spans = Vec::with_capacity(HINTS.len() * 2);
        for (keys, label) in HINTS {
            spans.push(Span::styled(*keys, Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }

    fn position_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let carousel = state.presentation.carousel;
        let project = if carousel.is_empty() {
            "none".to_string()
        } else {
            format!("{}/{}", carousel.index() + 1, carousel.len())
        };

        Line::from(vec![
            Span::styled("Section: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                state.presentation.active_section().to_string(),
                Style::default().fg(theme.text),
            ),
            Span::styled("  Project: ", Style::default().fg(theme.text_muted)),
            Span::styled(project, Style::default().fg(theme.text)),
            Span::styled("  Theme: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                state.presentation.theme.to_string(),
                Style::default().fg(theme.text),
            ),
        ])
    }
}
