//! Terminal color palettes for the light and dark display modes.

use ratatui::style::Color;

use crate::state::{ThemePreference, ThemeSurface};

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all widgets for both light and dark
/// terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Borders, titles and headings
    pub primary: Color,
    /// Highlights: active nav item, proficiency pips, current carousel dot
    pub accent: Color,
    /// Confirmation messages
    pub success: Color,
    /// Error messages
    pub error: Color,

    // Text hierarchy
    /// Body text
    pub text: Color,
    /// Labels and secondary content
    pub text_secondary: Color,
    /// Hints and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background
    pub background: Color,
    /// Popup and card background
    pub surface: Color,
}

impl Theme {
    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Palette for light terminal backgrounds.
    ///
    /// All text colors meet WCAG AA contrast against white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Rgb(110, 110, 110),

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Palette for a display mode.
    #[must_use]
    pub const fn from_preference(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeSurface for Theme {
    fn apply_theme(&mut self, theme: ThemePreference) {
        *self = Self::from_preference(theme);
    }
}
