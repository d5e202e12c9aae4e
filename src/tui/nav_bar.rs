//! Header bar: owner name, section menu and the theme glyph.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Header widget
pub struct NavBar;

impl NavBar {
    /// Render the header with the active section highlighted
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(4)])
            .split(inner);

        f.render_widget(Paragraph::new(Self::menu_line(state, theme)), chunks[0]);

        let glyph = Paragraph::new(Span::styled(
            state.presentation.theme.glyph(),
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Right);
        f.render_widget(glyph, chunks[1]);
    }

    fn menu_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let active = state.presentation.active_section();
        let mut spans = vec![
            Span::styled(
                format!(" {} ", state.content.profile.name),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(theme.text_muted)),
        ];

        for item in &state.content.nav {
            let style = if item.label == active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(item.label.clone(), style));
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }
}
