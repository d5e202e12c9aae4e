//! The canonical content schema.
//!
//! Every front end (terminal, web preview, static export) renders from one
//! [`SiteContent`]. It is loaded once, validated, and never mutated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{
    ContactChannels, NavItem, Phone, Proficiency, Profile, Project, Qualification,
    QualificationKind, SkillGroup, SocialLink, StatEntry,
};

/// All static content of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// The portfolio owner
    pub profile: Profile,
    /// Headline numbers, in display order
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    /// Skill groups, in display order
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Education and experience timeline
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    /// Projects, in carousel order
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Navigation menu, in menu and scan order
    pub nav: Vec<NavItem>,
}

impl SiteContent {
    /// Loads content from a TOML file, normalizes it and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid content file: {}", path.display()))
    }

    /// Parses, normalizes and validates content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut content: Self = toml::from_str(text).context("Failed to parse content TOML")?;
        content.normalize();
        content.validate()?;
        Ok(content)
    }

    /// Serializes the content back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize content")
    }

    /// Normalizes hand-written quirks (blank optional links).
    pub fn normalize(&mut self) {
        for project in &mut self.projects {
            project.normalize();
        }
        if self.profile.resume.as_deref().is_some_and(|r| r.trim().is_empty()) {
            self.profile.resume = None;
        }
    }

    /// Validates cross-table invariants.
    ///
    /// - the profile is valid
    /// - navigation is non-empty and labels are unique
    /// - skill names are unique within each group
    /// - every project has a title
    ///
    /// An empty project list is allowed; the carousel handles it.
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;

        if self.nav.is_empty() {
            anyhow::bail!("Navigation must contain at least one entry");
        }
        let mut labels = HashSet::new();
        for item in &self.nav {
            if item.label.trim().is_empty() {
                anyhow::bail!("Navigation entry for '{}' has an empty label", item.target);
            }
            if item.section_id().is_empty() {
                anyhow::bail!("Navigation entry '{}' has an empty target", item.label);
            }
            if !labels.insert(item.label.as_str()) {
                anyhow::bail!("Navigation label '{}' is used more than once", item.label);
            }
        }

        for group in &self.skills {
            group.validate()?;
        }
        for project in &self.projects {
            project.validate()?;
        }

        Ok(())
    }

    /// Label of the first navigation entry (the initial active section).
    pub fn first_section_label(&self) -> &str {
        self.nav.first().map_or("", |item| item.label.as_str())
    }

    /// Built-in content used when no content file is configured.
    pub fn builtin() -> Self {
        use Proficiency::{Basic, Intermediate};

        let profile = Profile {
            name: "Madhav".to_string(),
            headline: vec![
                "Hi, I'm Madhav".to_string(),
                "Data Science & Software".to_string(),
                "Builder in Philadelphia".to_string(),
            ],
            bio: "I build data-driven apps and dashboards with a focus on clean UI, strong \
                  analysis, and deployable projects. I enjoy Python, Streamlit, Tableau, and \
                  web development."
                .to_string(),
            location: "Philadelphia, PA".to_string(),
            contact: ContactChannels {
                email: "madhav@example.com".to_string(),
                phone: Some(Phone {
                    display: "+1 (555) 010-0199".to_string(),
                    dial: "+15550100199".to_string(),
                }),
            },
            socials: vec![SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/Mlamichhane1".to_string(),
            }],
            resume: Some("/resume.pdf".to_string()),
            photo: Some("/profile.jpg".to_string()),
            expertise: vec![
                "Data Analysis & Visualization".to_string(),
                "Streamlit App Development".to_string(),
                "Python + Pandas + NumPy".to_string(),
                "Tableau Dashboard".to_string(),
            ],
        };

        let stats = [
            ("Years of experience", "1+"),
            ("Completed projects", "10+"),
            ("Companies worked", "1+"),
        ]
        .into_iter()
        .map(|(label, value)| StatEntry {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect();

        let skills = vec![
            SkillGroup::new(
                "Frontend Developer",
                &[
                    ("HTML", Intermediate),
                    ("CSS", Intermediate),
                    ("JavaScript", Intermediate),
                    ("React", Intermediate),
                    ("Git", Intermediate),
                ],
            ),
            SkillGroup::new(
                "Programming Languages",
                &[
                    ("Python", Intermediate),
                    ("Java", Intermediate),
                    ("C", Intermediate),
                    ("C++", Basic),
                ],
            ),
            SkillGroup::new(
                "Backend & Tools",
                &[
                    ("Streamlit", Intermediate),
                    ("Pandas", Intermediate),
                    ("NumPy", Intermediate),
                    ("Tableau", Intermediate),
                    ("SQLite", Intermediate),
                ],
            ),
        ];

        let qualifications = vec![
            Qualification {
                kind: QualificationKind::Education,
                title: "B.S. Data Science".to_string(),
                organization: "Drexel University".to_string(),
                period: "2022 – present".to_string(),
                detail: Some("Coursework in statistics, databases and visualization".to_string()),
            },
            Qualification {
                kind: QualificationKind::Experience,
                title: "Data Analyst Co-op".to_string(),
                organization: "Philadelphia".to_string(),
                period: "2024".to_string(),
                detail: None,
            },
        ];

        let projects = vec![
            Project {
                title: "Greenlight: Policy Choice Optimizer".to_string(),
                category: "Decision-support Web App".to_string(),
                description: "Streamlit app that ranks policy/project alternatives using \
                              discounted present value and expected net benefits under \
                              uncertainty. Includes PV calculator, scenario input, 2-period \
                              demo, and CSV export."
                    .to_string(),
                tags: ["Python", "Streamlit", "Pandas", "NumPy"]
                    .map(String::from)
                    .to_vec(),
                demo: Some(
                    "https://greenlight-policy-optimizer-93ziew5luesdd89shjk2pm.streamlit.app"
                        .to_string(),
                ),
                repo: Some(
                    "https://github.com/Mlamichhane1/greenlight-policy-optimizer".to_string(),
                ),
                image: Some("/projects/greenlight.png".to_string()),
            },
            Project {
                title: "Expense Tracker".to_string(),
                category: "Python + SQLite".to_string(),
                description: "Tracks daily transactions, categories spending, and visualizes \
                              trends with charts. Simple, clean workflow for personal finance \
                              analysis."
                    .to_string(),
                tags: ["Python", "SQLite", "Matplotlib", "Pandas"]
                    .map(String::from)
                    .to_vec(),
                demo: None,
                repo: None,
                image: Some("/projects/expense.png".to_string()),
            },
            Project {
                title: "U.S. Inflation Trend Analyzer (2010–2024)".to_string(),
                category: "Tableau Dashboard".to_string(),
                description: "Analyzes CPI-based inflation trends (2010–2024). Highlights \
                              peak/average rates and year-by-year cost-of-living changes."
                    .to_string(),
                tags: ["Tableau", "Pandas", "NumPy"].map(String::from).to_vec(),
                demo: None,
                repo: None,
                image: Some("/projects/inflation.png".to_string()),
            },
        ];

        let nav = vec![
            NavItem::new("Home", "#home"),
            NavItem::new("Skills", "#skills"),
            NavItem::new("Qualification", "#qualification"),
            NavItem::new("Projects", "#projects"),
            NavItem::new("Contact", "#contact"),
        ];

        Self {
            profile,
            stats,
            skills,
            qualifications,
            projects,
            nav,
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves an asset reference against a base path.
///
/// Absolute `http://`/`https://` references pass through untouched; anything
/// else is joined onto `base` with exactly one `/` between them.
pub fn resolve_asset(base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    let base = base.trim_end_matches('/');
    let reference = reference.trim_start_matches('/');
    if base.is_empty() {
        format!("/{reference}")
    } else {
        format!("{base}/{reference}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_is_valid() {
        let content = SiteContent::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.nav.len(), 5);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.first_section_label(), "Home");
    }

    #[test]
    fn test_toml_round_trip() {
        let content = SiteContent::builtin();
        let text = content.to_toml_string().unwrap();
        let parsed = SiteContent::from_toml_str(&text).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_load_normalizes_blank_links() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("content.toml");
        fs::write(
            &path,
            r##"
[profile]
name = "Ada"
bio = "Engines."
location = "London"
resume = ""

[profile.contact]
email = "ada@example.com"

[[projects]]
title = "Analytical Engine"
category = "Hardware"
description = "Never finished."
demo = ""
repo = ""

[[nav]]
label = "Home"
target = "#home"
"##,
        )
        .unwrap();

        let content = SiteContent::load(&path).unwrap();
        assert_eq!(content.profile.resume, None);
        assert_eq!(content.projects[0].demo, None);
        assert_eq!(content.projects[0].repo, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = SiteContent::load(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn test_validate_rejects_empty_nav() {
        let mut content = SiteContent::builtin();
        content.nav.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_nav_label() {
        let mut content = SiteContent::builtin();
        content.nav.push(NavItem::new("Home", "#elsewhere"));
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_skill() {
        let mut content = SiteContent::builtin();
        content.skills[0].skills.push(crate::models::Skill {
            name: "HTML".to_string(),
            level: Proficiency::Basic,
        });
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_allows_empty_projects() {
        let mut content = SiteContent::builtin();
        content.projects.clear();
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_resolve_asset() {
        assert_eq!(resolve_asset("/", "/profile.jpg"), "/profile.jpg");
        assert_eq!(resolve_asset("", "profile.jpg"), "/profile.jpg");
        assert_eq!(
            resolve_asset("/portfolio/", "/projects/a.png"),
            "/portfolio/projects/a.png"
        );
        assert_eq!(resolve_asset("assets", "a.png"), "assets/a.png");
        assert_eq!(
            resolve_asset("/portfolio", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
