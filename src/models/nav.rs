//! Navigation entries and the qualification timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section ids every front end lays out, in page order.
///
/// Nav targets outside this list point at nothing and are skipped by the
/// active-section scan.
pub const PAGE_SECTIONS: [&str; 5] = ["home", "skills", "qualification", "projects", "contact"];

/// A navigation menu entry pointing at a page section.
///
/// Order matters twice: it is the menu order and the order in which sections
/// are scanned when deciding which one is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Menu label, also the value of the active-section state
    pub label: String,
    /// Target section, either `#home` or `home`
    pub target: String,
}

impl NavItem {
    /// Creates a nav item.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Section identifier without the leading `#`.
    pub fn section_id(&self) -> &str {
        self.target.trim_start_matches('#')
    }

    /// Anchor href (always with a leading `#`).
    pub fn href(&self) -> String {
        format!("#{}", self.section_id())
    }
}

/// Kind of qualification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationKind {
    /// Degrees, courses, certificates
    Education,
    /// Jobs, internships, research positions
    Experience,
}

impl fmt::Display for QualificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Education => f.write_str("Education"),
            Self::Experience => f.write_str("Experience"),
        }
    }
}

/// One entry of the qualification timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// Education or experience
    pub kind: QualificationKind,
    /// Degree or role
    pub title: String,
    /// School or company
    pub organization: String,
    /// Free-text period (e.g., "2022 – present")
    pub period: String,
    /// Optional one-line detail
    #[serde(default)]
    pub detail: Option<String>,
}
