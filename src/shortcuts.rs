//! Keyboard shortcuts for the terminal portfolio.
//!
//! Maps key events to [`Action`]s so the event loop and the help line in the
//! status bar read from the same table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Everything the main view can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SCROLLING ===
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    NextSection,
    PreviousSection,

    // === CAROUSEL ===
    NextProject,
    PreviousProject,
    /// Direct selection, zero-based
    SelectProject(usize),

    // === LINKS ===
    OpenResume,
    OpenDemo,
    OpenRepo,

    // === OTHER ===
    ToggleTheme,
    OpenContactForm,
    Quit,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::ScrollToTop => "scroll_top",
            Self::ScrollToBottom => "scroll_bottom",
            Self::NextSection => "next_section",
            Self::PreviousSection => "previous_section",
            Self::NextProject => "next_project",
            Self::PreviousProject => "previous_project",
            Self::SelectProject(_) => "select_project",
            Self::OpenResume => "open_resume",
            Self::OpenDemo => "open_demo",
            Self::OpenRepo => "open_repo",
            Self::ToggleTheme => "toggle_theme",
            Self::OpenContactForm => "open_contact_form",
            Self::Quit => "quit",
        }
    }
}

/// Key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Creates a binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Binding matching a key event.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Lookup table from key bindings to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

/// Short help entries shown in the status bar, in display order.
pub const HINTS: &[(&str, &str)] = &[
    ("↑↓/PgUp/PgDn", "scroll"),
    ("Tab", "section"),
    ("←→/1-9", "project"),
    ("d/r", "demo/code"),
    ("o", "resume"),
    ("c", "contact"),
    ("t", "theme"),
    ("q", "quit"),
];

impl ShortcutRegistry {
    /// Registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(K::Up, M::NONE, Action::ScrollUp);
        self.register(K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(K::Down, M::NONE, Action::ScrollDown);
        self.register(K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(K::PageUp, M::NONE, Action::PageUp);
        self.register(K::PageDown, M::NONE, Action::PageDown);
        self.register(K::Char(' '), M::NONE, Action::PageDown);
        self.register(K::Home, M::NONE, Action::ScrollToTop);
        self.register(K::Char('g'), M::NONE, Action::ScrollToTop);
        self.register(K::End, M::NONE, Action::ScrollToBottom);
        self.register(K::Char('G'), M::SHIFT, Action::ScrollToBottom);
        self.register(K::Tab, M::NONE, Action::NextSection);
        self.register(K::BackTab, M::SHIFT, Action::PreviousSection);

        self.register(K::Right, M::NONE, Action::NextProject);
        self.register(K::Char('l'), M::NONE, Action::NextProject);
        self.register(K::Left, M::NONE, Action::PreviousProject);
        self.register(K::Char('h'), M::NONE, Action::PreviousProject);
        for (index, digit) in ('1'..='9').enumerate() {
            self.register(K::Char(digit), M::NONE, Action::SelectProject(index));
        }

        self.register(K::Char('o'), M::NONE, Action::OpenResume);
        self.register(K::Char('d'), M::NONE, Action::OpenDemo);
        self.register(K::Char('r'), M::NONE, Action::OpenRepo);

        self.register(K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(K::Char('c'), M::NONE, Action::OpenContactForm);
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Esc, M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Action bound to `event`, if any.
    ///
    /// Some terminals report shifted characters without the SHIFT modifier
    /// (or Shift+Tab as a bare `BackTab`), so a miss is retried with SHIFT
    /// added.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&binding).copied().or_else(|| {
            let shifted = KeyBinding::new(binding.code, binding.modifiers | KeyModifiers::SHIFT);
            self.bindings.get(&shifted).copied()
        })
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
