//! Light/dark theme preference.
//!
//! The transition itself ([`ThemePreference::toggled`]) is pure. Applying the
//! result to a surface and persisting it is done by [`commit_theme`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::store::PreferenceStore;

/// Storage key of the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl ThemePreference {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// True for [`ThemePreference::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph shown on the toggle control.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    /// Interprets a stored value, falling back to the default.
    ///
    /// Absent, empty or unknown values all mean light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            Some(Err(())) => {
                debug!("Ignoring unknown stored theme {value:?}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that visibly reflects the theme (a palette, a document root).
pub trait ThemeSurface {
    /// Applies `theme` to the surface.
    fn apply_theme(&mut self, theme: ThemePreference);
}

/// Reads the persisted preference, falling back to light.
pub fn restore_theme(store: &impl PreferenceStore) -> ThemePreference {
    ThemePreference::from_stored(store.get(THEME_KEY).as_deref())
}

/// Applies `theme` to `surface`, then writes it back to `store`.
///
/// Runs on every transition including the initial load. A failed write is
/// logged and otherwise ignored; the applied theme stays in effect.
pub fn commit_theme(
    theme: ThemePreference,
    store: &mut impl PreferenceStore,
    surface: &mut impl ThemeSurface,
) {
    if let Err(e) = try_commit_theme(theme, store, surface) {
        warn!("Failed to persist theme preference: {e:#}");
    }
}

/// Like [`commit_theme`], but hands a failed write back to the caller.
///
/// The surface is updated before the write either way.
pub fn try_commit_theme(
    theme: ThemePreference,
    store: &mut impl PreferenceStore,
    surface: &mut impl ThemeSurface,
) -> anyhow::Result<()> {
    surface.apply_theme(theme);
    store.set(THEME_KEY, theme.as_str())
}
