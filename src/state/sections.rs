//! Active-section tracking from scroll position.

use crate::models::NavItem;

/// Where a navigation section starts, if it was laid out at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPosition<'a> {
    /// Nav label of the section
    pub label: &'a str,
    /// Vertical offset of the section start; `None` when the target is missing
    pub offset: Option<u32>,
}

/// Builds section positions in navigation order.
///
/// `locate` maps a section id (without `#`) to its offset.
pub fn section_positions<'a>(
    nav: &'a [NavItem],
    locate: impl Fn(&str) -> Option<u32>,
) -> Vec<SectionPosition<'a>> {
    nav.iter()
        .map(|item| SectionPosition {
            label: item.label.as_str(),
            offset: locate(item.section_id()),
        })
        .collect()
}

/// Returns the last section in navigation order whose start is at or above
/// `position + margin`.
///
/// Missing sections are skipped. `None` means no section qualifies, in which
/// case callers keep their previous answer.
pub fn scan_active_section<'a>(
    position: u32,
    sections: &[SectionPosition<'a>],
    margin: u32,
) -> Option<&'a str> {
    let probe = position.saturating_add(margin);
    sections
        .iter()
        .rev()
        .find(|section| section.offset.is_some_and(|offset| probe >= offset))
        .map(|section| section.label)
}

/// Holds the active section between scroll events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    active: String,
    margin: u32,
}

impl SectionTracker {
    /// Starts with `initial` active.
    pub fn new(initial: impl Into<String>, margin: u32) -> Self {
        Self {
            active: initial.into(),
            margin,
        }
    }

    /// Currently active label.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Lookahead margin.
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Re-derives the active section for `position`.
    ///
    /// Returns true when the active section changed.
    pub fn observe(&mut self, position: u32, sections: &[SectionPosition<'_>]) -> bool {
        match scan_active_section(position, sections, self.margin) {
            Some(label) if label != self.active => {
                self.active = label.to_string();
                true
            }
            _ => false,
        }
    }
}
