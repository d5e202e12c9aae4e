//! Projects shown in the carousel.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A portfolio project.
///
/// The position of a project in [`SiteContent::projects`](super::SiteContent)
/// is its carousel position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title
    pub title: String,
    /// Category label (e.g., "Tableau Dashboard")
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Ordered technology tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub demo: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub repo: Option<String>,
    /// Thumbnail reference (resolved against the asset base)
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Replaces blank optional links with `None`.
    ///
    /// Content files written by hand often carry `demo = ""` for "no demo".
    pub fn normalize(&mut self) {
        for link in [&mut self.demo, &mut self.repo, &mut self.image] {
            if link.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *link = None;
            }
        }
    }

    /// Validates required fields.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Project title cannot be empty");
        }
        Ok(())
    }

    /// Returns true if the project has at least one outbound link.
    pub fn has_links(&self) -> bool {
        self.demo.is_some() || self.repo.is_some()
    }
}
