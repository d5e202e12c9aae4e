//! Presentation state controller.
//!
//! Owns the three pieces of view state (theme, active section, carousel
//! index). [`PresentationState::apply`] is a pure transition; side effects
//! for the theme are run afterwards through [`commit_theme`].

pub mod carousel;
pub mod contact;
pub mod sections;
pub mod theme;

pub use carousel::Carousel;
pub use contact::{ComposeRequest, ContactForm, SUBJECT_PREFIX};
pub use sections::{scan_active_section, section_positions, SectionPosition, SectionTracker};
pub use theme::{
    commit_theme, restore_theme, try_commit_theme, ThemePreference, ThemeSurface, THEME_KEY,
};

use crate::models::{Project, SiteContent};

/// Something the user or the host did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Flip light/dark
    ToggleTheme,
    /// The viewport now starts at this position
    Scrolled(u32),
    /// Show the next project
    NextProject,
    /// Show the previous project
    PreviousProject,
    /// Show the project at this index
    SelectProject(usize),
}

/// What an applied event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// New theme, when it changed (needs [`commit_theme`])
    pub theme: Option<ThemePreference>,
    /// True when the active section changed
    pub section_changed: bool,
    /// True when the carousel index changed
    pub project_changed: bool,
}

impl Transition {
    /// True when nothing changed.
    pub fn is_noop(&self) -> bool {
        self.theme.is_none() && !self.section_changed && !self.project_changed
    }
}

/// Mutable view state, re-derived on every launch apart from the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    /// Current theme
    pub theme: ThemePreference,
    /// Active navigation section
    pub sections: SectionTracker,
    /// Carousel over the project table
    pub carousel: Carousel,
}

impl PresentationState {
    /// Initial state for `content`: first nav section active, first project
    /// shown, and the given (restored) theme.
    pub fn new(content: &SiteContent, theme: ThemePreference, margin: u32) -> Self {
        Self {
            theme,
            sections: SectionTracker::new(content.first_section_label(), margin),
            carousel: Carousel::new(content.projects.len()),
        }
    }

    /// Applies one event.
    ///
    /// `sections` is only consulted for [`ViewEvent::Scrolled`].
    pub fn apply(&mut self, event: ViewEvent, sections: &[SectionPosition<'_>]) -> Transition {
        let mut transition = Transition::default();
        match event {
            ViewEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                transition.theme = Some(self.theme);
            }
            ViewEvent::Scrolled(position) => {
                transition.section_changed = self.sections.observe(position, sections);
            }
            ViewEvent::NextProject => {
                transition.project_changed = self.move_carousel(Carousel::next);
            }
            ViewEvent::PreviousProject => {
                transition.project_changed = self.move_carousel(Carousel::previous);
            }
            ViewEvent::SelectProject(index) => {
                transition.project_changed = self.move_carousel(|c| c.go_to(index));
            }
        }
        transition
    }

    fn move_carousel(&mut self, step: impl FnOnce(&mut Carousel) -> usize) -> bool {
        let before = self.carousel.index();
        step(&mut self.carousel) != before
    }

    /// Active navigation label.
    pub fn active_section(&self) -> &str {
        self.sections.active()
    }

    /// The displayed project, derived from the index and the content table.
    pub fn current_project<'a>(&self, content: &'a SiteContent) -> Option<&'a Project> {
        self.carousel.current(&content.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> (SiteContent, PresentationState) {
        let content = SiteContent::builtin();
        let state = PresentationState::new(&content, ThemePreference::Light, 120);
        (content, state)
    }

    #[test]
    fn test_initial_state() {
        let (content, state) = state();
        assert_eq!(state.active_section(), "Home");
        assert_eq!(state.carousel.index(), 0);
        assert_eq!(
            state.current_project(&content).map(|p| p.title.as_str()),
            Some("Greenlight: Policy Choice Optimizer")
        );
    }

    #[test]
    fn test_toggle_reports_new_theme() {
        let (_, mut state) = state();
        let transition = state.apply(ViewEvent::ToggleTheme, &[]);
        assert_eq!(transition.theme, Some(ThemePreference::Dark));
        assert_eq!(state.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_then_commit_updates_store_and_surface() {
        struct Root(bool);
        impl ThemeSurface for Root {
            fn apply_theme(&mut self, theme: ThemePreference) {
                self.0 = theme.is_dark();
            }
        }

        let (_, mut state) = state();
        let mut store = MemoryStore::new();
        let mut root = Root(false);

        for expected_dark in [true, false] {
            let transition = state.apply(ViewEvent::ToggleTheme, &[]);
            if let Some(theme) = transition.theme {
                commit_theme(theme, &mut store, &mut root);
            }
            assert_eq!(root.0, expected_dark);
            assert_eq!(restore_theme(&store).is_dark(), expected_dark);
        }
    }

    #[test]
    fn test_carousel_events() {
        let (content, mut state) = state();

        let t = state.apply(ViewEvent::PreviousProject, &[]);
        assert!(t.project_changed);
        assert_eq!(state.carousel.index(), 2);

        state.apply(ViewEvent::NextProject, &[]);
        assert_eq!(state.carousel.index(), 0);

        state.apply(ViewEvent::SelectProject(1), &[]);
        assert_eq!(
            state.current_project(&content).map(|p| p.title.as_str()),
            Some("Expense Tracker")
        );

        let t = state.apply(ViewEvent::SelectProject(1), &[]);
        assert!(t.is_noop());
    }

    #[test]
    fn test_scroll_event() {
        let (content, mut state) = state();
        let offsets = [0, 800, 1600, 2400, 3200];
        let sections = section_positions(&content.nav, |id| {
            content
                .nav
                .iter()
                .position(|item| item.section_id() == id)
                .map(|i| offsets[i])
        });

        let t = state.apply(ViewEvent::Scrolled(2300), &sections);
        assert!(t.section_changed);
        assert_eq!(state.active_section(), "Projects");

        let t = state.apply(ViewEvent::Scrolled(2300), &sections);
        assert!(!t.section_changed);
    }

    #[test]
    fn test_empty_project_table() {
        let mut content = SiteContent::builtin();
        content.projects.clear();
        let mut state = PresentationState::new(&content, ThemePreference::Dark, 0);

        assert!(state.apply(ViewEvent::NextProject, &[]).is_noop());
        assert!(state.current_project(&content).is_none());
    }
}
