//! Data models for the portfolio content.
//!
//! This module contains the static content tables every front end renders.
//! Models are independent of UI and presentation state.

pub mod content;
pub mod nav;
pub mod profile;
pub mod project;
pub mod skill;

// Re-export all model types
pub use content::{resolve_asset, SiteContent};
pub use nav::{NavItem, Qualification, QualificationKind, PAGE_SECTIONS};
pub use profile::{ContactChannels, Phone, Profile, SocialLink, StatEntry};
pub use project::Project;
pub use skill::{Proficiency, Skill, SkillGroup};
