//! Contact form popup.
//!
//! Three text fields. Ctrl+S hands the composed message to the mail client,
//! Ctrl+Y copies the compose link instead, Esc closes without doing anything.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::Component;
use super::Theme;
use crate::state::ContactForm;

/// Which field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    /// Sender name
    #[default]
    Name,
    /// Sender email
    Email,
    /// Free-text message
    Message,
}

impl ContactField {
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// What the popup asks the parent to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormEvent {
    /// Hand the form to the mail client
    Send(ContactForm),
    /// Copy the compose link to the clipboard
    Copy(ContactForm),
    /// Close without composing
    Cancelled,
}

/// Popup state.
#[derive(Debug, Clone, Default)]
pub struct ContactFormPopup {
    form: ContactForm,
    focus: ContactField,
    recipient: String,
}

impl ContactFormPopup {
    /// Empty form addressed to `recipient` (shown in the title).
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }

    /// Current field values.
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Focused field.
    pub const fn focus(&self) -> ContactField {
        self.focus
    }

    const fn field_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Message => &mut self.form.message,
        }
    }

    fn field_widget<'a>(
        &self,
        field: ContactField,
        title: &'a str,
        value: &'a str,
        theme: &Theme,
    ) -> Paragraph<'a> {
        let focused = self.focus == field;
        let border = if focused { theme.accent } else { theme.text_muted };
        let mut text = value.to_string();
        if focused {
            text.push('▏');
        }
        Paragraph::new(text)
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border)),
            )
    }
}

impl Component for ContactFormPopup {
    type Event = ContactFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(ContactFormEvent::Cancelled),
            KeyCode::Char('s') if ctrl => Some(ContactFormEvent::Send(self.form.clone())),
            KeyCode::Char('y') if ctrl => Some(ContactFormEvent::Copy(self.form.clone())),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter if self.focus == ContactField::Message => {
                self.form.message.push('\n');
                None
            }
            KeyCode::Enter => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Backspace => {
                self.field_mut().pop();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                self.field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" Message to {} ", self.recipient),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Email
                Constraint::Min(4),    // Message
                Constraint::Length(1), // Help
            ])
            .split(inner);

        f.render_widget(
            self.field_widget(ContactField::Name, " Name ", &self.form.name, theme),
            chunks[0],
        );
        f.render_widget(
            self.field_widget(ContactField::Email, " Email ", &self.form.email, theme),
            chunks[1],
        );
        f.render_widget(
            self.field_widget(ContactField::Message, " Message ", &self.form.message, theme),
            chunks[2],
        );

        let help = Line::from(vec![
            Span::styled("Ctrl+S", Style::default().fg(theme.accent)),
            Span::styled(" send  ", Style::default().fg(theme.text_muted)),
            Span::styled("Ctrl+Y", Style::default().fg(theme.accent)),
            Span::styled(" copy link  ", Style::default().fg(theme.text_muted)),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::styled(" next field  ", Style::default().fg(theme.text_muted)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" cancel", Style::default().fg(theme.text_muted)),
        ]);
        f.render_widget(Paragraph::new(help), chunks[3]);
    }
}
