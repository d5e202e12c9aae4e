//! Terminal user interface for browsing the portfolio.
//!
//! The page is laid out once per frame into a [`Document`]; scrolling moves
//! a row cursor through it and every move is fed to the presentation state
//! as a scroll event, so the header always highlights the section in view.

pub mod component;
pub mod contact_form;
pub mod document;
pub mod nav_bar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Padding, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::handoff;
use crate::models::{resolve_asset, SiteContent};
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::state::{commit_theme, restore_theme, PresentationState, ViewEvent};
use crate::store::FileStore;

pub use component::Component;
pub use contact_form::{ContactFormEvent, ContactFormPopup};
pub use document::Document;
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Rows taken by the header and the status bar together.
const CHROME_ROWS: u16 = 6;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: u32 = 3;

/// Application state for the terminal portfolio.
pub struct AppState {
    /// Static content being shown
    pub content: SiteContent,
    /// Loaded configuration
    pub config: Config,
    /// Theme, active section and carousel index
    pub presentation: PresentationState,
    /// Palette derived from the theme preference
    pub theme: Theme,
    /// Where the theme preference is persisted
    pub store: FileStore,
    /// Laid-out page
    pub document: Document,
    /// First visible document row
    pub scroll: u32,
    /// Contact form popup, when open
    pub contact_popup: Option<ContactFormPopup>,
    /// Last status message
    pub status_message: String,
    /// Error shown in place of the status message
    pub error_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    shortcuts: ShortcutRegistry,
    width: u16,
    viewport_height: u16,
    opener: fn(&str) -> Result<()>,
}

impl AppState {
    /// Creates the state, restoring the theme from `store`.
    pub fn new(content: SiteContent, config: Config, mut store: FileStore) -> Self {
        let preference = restore_theme(&store);
        let mut theme = Theme::default();
        // Initial load commits the restored value too.
        commit_theme(preference, &mut store, &mut theme);

        let presentation =
            PresentationState::new(&content, preference, config.ui.lookahead_margin);
        let mut state = Self {
            content,
            config,
            presentation,
            theme,
            store,
            document: Document::default(),
            scroll: 0,
            contact_popup: None,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
            shortcuts: ShortcutRegistry::new(),
            width: 80,
            viewport_height: 20,
            opener: handoff::open_external,
        };
        state.rebuild_document();
        state
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Adapts to a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        let viewport_height = height.saturating_sub(CHROME_ROWS).max(1);
        if (width, viewport_height) == (self.width, self.viewport_height) {
            return;
        }
        self.width = width;
        self.viewport_height = viewport_height;
        self.rebuild_document();
        self.scroll_to(self.scroll);
    }

    fn rebuild_document(&mut self) {
        self.document = Document::build(&self.content, &self.presentation, &self.theme, self.width);
    }

    /// Feeds one event to the presentation state and runs its side effects.
    pub fn dispatch(&mut self, event: ViewEvent) {
        let sections = self.document.section_positions(&self.content);
        let transition = self.presentation.apply(event, &sections);

        if let Some(theme) = transition.theme {
            commit_theme(theme, &mut self.store, &mut self.theme);
            self.set_status(format!("Theme: {theme}"));
        }
        if transition.section_changed {
            debug!("Active section: {}", self.presentation.active_section());
        }
        if transition.theme.is_some() || transition.project_changed {
            self.rebuild_document();
        }
    }

    /// Largest useful scroll position: the last section can reach the top.
    fn max_scroll(&self) -> u32 {
        let last_page = self
            .document
            .height()
            .saturating_sub(u32::from(self.viewport_height));
        let last_anchor = self
            .document
            .section_positions(&self.content)
            .iter()
            .filter_map(|section| section.offset)
            .max()
            .unwrap_or(0);
        last_page.max(last_anchor)
    }

    /// Scrolls so that `row` is the first visible row.
    pub fn scroll_to(&mut self, row: u32) {
        self.scroll = row.min(self.max_scroll());
        self.dispatch(ViewEvent::Scrolled(self.scroll));
    }

    fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.scroll).saturating_add(delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    /// Jumps to the next (or previous) laid-out section in navigation order.
    fn jump_section(&mut self, forward: bool) {
        let sections = self.document.section_positions(&self.content);
        let active = self.presentation.active_section();
        let current = sections
            .iter()
            .position(|section| section.label == active)
            .unwrap_or(0);

        let target = if forward {
            sections
                .iter()
                .skip(current + 1)
                .find_map(|section| section.offset)
        } else {
            sections
                .iter()
                .take(current)
                .rev()
                .find_map(|section| section.offset)
        };

        if let Some(row) = target {
            self.scroll_to(row);
        }
    }

    fn open_link(&mut self, what: &str, target: Option<String>) {
        let Some(target) = target else {
            self.set_error(format!("No {what} link here"));
            return;
        };
        match (self.opener)(&target) {
            Ok(()) => self.set_status(format!("Opened {what}: {target}")),
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }

    /// Runs one shortcut action.
    pub fn handle_action(&mut self, action: Action) {
        debug!("Action: {}", action.id());
        let page = i64::from(self.viewport_height.saturating_sub(2).max(1));

        match action {
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-page),
            Action::PageDown => self.scroll_by(page),
            Action::ScrollToTop => self.scroll_to(0),
            Action::ScrollToBottom => self.scroll_to(u32::MAX),
            Action::NextSection => self.jump_section(true),
            Action::PreviousSection => self.jump_section(false),
            Action::NextProject => self.dispatch(ViewEvent::NextProject),
            Action::PreviousProject => self.dispatch(ViewEvent::PreviousProject),
            Action::SelectProject(index) => self.dispatch(ViewEvent::SelectProject(index)),
            Action::OpenResume => {
                let resume = self
                    .content
                    .profile
                    .resume
                    .as_deref()
                    .map(|resume| resolve_asset(&self.config.content.asset_base, resume));
                self.open_link("resume", resume);
            }
            Action::OpenDemo => {
                let demo = self
                    .presentation
                    .current_project(&self.content)
                    .and_then(|project| project.demo.clone());
                self.open_link("demo", demo);
            }
            Action::OpenRepo => {
                let repo = self
                    .presentation
                    .current_project(&self.content)
                    .and_then(|project| project.repo.clone());
                self.open_link("code", repo);
            }
            Action::ToggleTheme => self.dispatch(ViewEvent::ToggleTheme),
            Action::OpenContactForm => {
                self.contact_popup =
                    Some(ContactFormPopup::new(&self.content.profile.contact.email));
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn handle_contact_event(&mut self, event: ContactFormEvent) {
        let recipient = self.content.profile.contact.email.clone();
        match event {
            ContactFormEvent::Cancelled => {
                self.contact_popup = None;
            }
            ContactFormEvent::Send(form) => {
                if form.is_blank() {
                    self.set_error("Write something before sending");
                    return;
                }
                let uri = form.compose(&recipient).to_uri();
                self.contact_popup = None;
                match (self.opener)(&uri) {
                    Ok(()) => self.set_status("Message handed to your mail client"),
                    Err(e) => self.set_error(format!("{e:#}")),
                }
            }
            ContactFormEvent::Copy(form) => {
                let uri = form.compose(&recipient).to_uri();
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(uri)) {
                    Ok(()) => self.set_status("Compose link copied to clipboard"),
                    Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
                }
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("Starting terminal portfolio");
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.resize(size.width, size.height);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(state, key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => state.scroll_by(i64::from(WHEEL_ROWS)),
                    MouseEventKind::ScrollUp => state.scroll_by(-i64::from(WHEEL_ROWS)),
                    _ => {}
                },
                // Resize is picked up at the top of the loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Document
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    NavBar::render(f, chunks[0], state, theme);

    let scroll = u16::try_from(state.scroll).unwrap_or(u16::MAX);
    let body = Paragraph::new(state.document.lines().to_vec())
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    f.render_widget(body, chunks[1]);

    StatusBar::render(f, chunks[2], state, theme);

    if let Some(popup) = &state.contact_popup {
        popup.render(f, centered_rect(70, 70, f.area()), theme);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    use crossterm::event::KeyCode;

    // Enter or Esc only dismisses a pending error
    if state.error_message.is_some() && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        state.clear_error();
        return;
    }

    if let Some(popup) = &mut state.contact_popup {
        if let Some(event) = popup.handle_input(key) {
            state.handle_contact_event(event);
        }
        return;
    }

    if let Some(action) = state.shortcuts.lookup(key) {
        state.status_message.clear();
        state.handle_action(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemePreference;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn app(temp: &TempDir) -> AppState {
        let store = FileStore::open(temp.path().join("preferences.toml"));
        let mut state = AppState::new(SiteContent::builtin(), Config::default(), store);
        state.opener = |_| Ok(());
        state.resize(80, 30);
        state
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_light_at_home() {
        let temp = TempDir::new().unwrap();
        let state = app(&temp);
        assert_eq!(state.presentation.theme, ThemePreference::Light);
        assert_eq!(state.theme, Theme::light());
        assert_eq!(state.presentation.active_section(), "Home");
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_theme_toggle_persists_across_restarts() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.theme, Theme::dark());

        let reopened = app(&temp);
        assert_eq!(reopened.presentation.theme, ThemePreference::Dark);
        assert_eq!(reopened.theme, Theme::dark());
    }

    #[test]
    fn test_tab_walks_sections_in_nav_order() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.presentation.active_section(), "Skills");
        assert_eq!(Some(state.scroll), state.document.offset_of("skills"));

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.presentation.active_section(), "Qualification");

        handle_key_event(&mut state, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.presentation.active_section(), "Skills");
    }

    #[test]
    fn test_scrolling_tracks_active_section() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        let skills = state.document.offset_of("skills").unwrap();
        let margin = state.config.ui.lookahead_margin;

        state.scroll_to(skills - margin - 1);
        assert_eq!(state.presentation.active_section(), "Home");
        state.scroll_to(skills - margin);
        assert_eq!(state.presentation.active_section(), "Skills");
    }

    #[test]
    fn test_scroll_clamps() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.scroll, 0);

        press(&mut state, KeyCode::End);
        assert_eq!(state.scroll, state.max_scroll());
        assert_eq!(state.presentation.active_section(), "Contact");
    }

    #[test]
    fn test_carousel_keys() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.presentation.carousel.index(), 2);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.presentation.carousel.index(), 0);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.presentation.carousel.index(), 1);
    }

    #[test]
    fn test_contact_popup_send() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Char('c'));
        assert!(state.contact_popup.is_some());

        // While the popup is open, 'q' is text
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);

        handle_key_event(&mut state, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(state.contact_popup.is_none());
        assert_eq!(state.status_message, "Message handed to your mail client");
    }

    #[test]
    fn test_blank_contact_form_is_not_sent() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Char('c'));
        handle_key_event(&mut state, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(state.contact_popup.is_some());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_open_demo_reports_missing_link() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        state.content.projects[0].demo = None;
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.error_message.as_deref(), Some("No demo link here"));

        press(&mut state, KeyCode::Esc);
        assert!(state.error_message.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit() {
        let temp = TempDir::new().unwrap();
        let mut state = app(&temp);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 70, area);
        assert!(popup.x > 0 && popup.right() < area.right());
        assert!(popup.y > 0 && popup.bottom() < area.bottom());
    }
}
