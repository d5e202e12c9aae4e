//! Skill groups and proficiency levels.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Self-assessed proficiency for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Proficiency {
    /// Working knowledge
    #[serde(alias = "basic")]
    Basic,
    /// Comfortable on real projects
    #[default]
    #[serde(alias = "intermediate")]
    Intermediate,
    /// Deep experience
    #[serde(alias = "advanced")]
    Advanced,
}

impl Proficiency {
    /// Number of filled pips when drawn as a meter (out of 3).
    pub const fn pips(self) -> usize {
        match self {
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Pip meter such as `●●○`.
    pub fn meter(self) -> String {
        let filled = self.pips();
        format!("{}{}", "●".repeat(filled), "○".repeat(3 - filled))
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// One named skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name, unique within its group
    pub name: String,
    /// Proficiency level
    #[serde(default)]
    pub level: Proficiency,
}

/// A titled, ordered list of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group title (e.g., "Frontend Developer")
    pub title: String,
    /// Skills in display order
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    /// Creates a group from `(name, level)` pairs.
    pub fn new(title: impl Into<String>, skills: &[(&str, Proficiency)]) -> Self {
        Self {
            title: title.into(),
            skills: skills
                .iter()
                .map(|(name, level)| Skill {
                    name: (*name).to_string(),
                    level: *level,
                })
                .collect(),
        }
    }

    /// Validates that the title is set and skill names are unique.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Skill group title cannot be empty");
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                anyhow::bail!("Skill group '{}' contains an unnamed skill", self.title);
            }
            if !seen.insert(skill.name.as_str()) {
                anyhow::bail!(
                    "Skill '{}' appears more than once in group '{}'",
                    skill.name,
                    self.title
                );
            }
        }

        Ok(())
    }
}
