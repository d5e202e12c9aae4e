//! Profile, contact channels and headline stats.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The portfolio owner.
///
/// Exactly one profile exists per [`SiteContent`](super::SiteContent) and it
/// is never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Short display name (e.g., "Madhav")
    pub name: String,
    /// Hero headline, one entry per rendered line
    #[serde(default)]
    pub headline: Vec<String>,
    /// Biography paragraph
    pub bio: String,
    /// Free-text location (e.g., "Philadelphia, PA")
    pub location: String,
    /// Email and phone
    pub contact: ContactChannels,
    /// Social profile links, rendered in order
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Resume document link (opaque, resolved against the asset base)
    #[serde(default)]
    pub resume: Option<String>,
    /// Profile photo reference (resolved against the asset base)
    #[serde(default)]
    pub photo: Option<String>,
    /// Areas of expertise shown as a bullet list in the hero
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// Ways to reach the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    /// Email address; also the recipient of composed messages
    pub email: String,
    /// Phone number, if published
    #[serde(default)]
    pub phone: Option<Phone>,
}

/// A phone number in display and dial form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Human-readable form (e.g., "+1 (555) 010-0199")
    pub display: String,
    /// Dialable form used for `tel:` links (e.g., "+15550100199")
    pub dial: String,
}

impl Phone {
    /// Returns the `tel:` link for this number.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

/// A link to an external profile (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label
    pub label: String,
    /// Target URL, passed through untouched
    pub url: String,
}

/// A headline number shown in the hero (e.g., "Completed projects" / "10+").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Caption
    pub label: String,
    /// Display value, kept as text so "1+" survives
    pub value: String,
}

impl Profile {
    /// Validates the profile fields that other features rely on.
    ///
    /// The email must look like an address because it becomes the recipient
    /// of every composed message.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Profile name cannot be empty");
        }

        let email = self.contact.email.trim();
        if email.is_empty() {
            anyhow::bail!("Profile email cannot be empty");
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            anyhow::bail!("Profile email '{email}' is not a valid address");
        }

        for social in &self.socials {
            if social.url.trim().is_empty() {
                anyhow::bail!("Social link '{}' has an empty URL", social.label);
            }
        }

        Ok(())
    }

    /// Mailto link for the profile email, without any query.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            headline: vec!["Hi, I'm Ada".to_string()],
            bio: "Builds things.".to_string(),
            location: "London".to_string(),
            contact: ContactChannels {
                email: "ada@example.com".to_string(),
                phone: Some(Phone {
                    display: "+44 20 7946 0000".to_string(),
                    dial: "+442079460000".to_string(),
                }),
            },
            socials: vec![],
            resume: None,
            photo: None,
            expertise: vec![],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut p = profile();
        p.name = "  ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_bad_email() {
        let mut p = profile();
        p.contact.email = "ada.example.com".to_string();
        assert!(p.validate().is_err());

        p.contact.email = "ada@".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_empty_social_url() {
        let mut p = profile();
        p.socials.push(SocialLink {
            label: "GitHub".to_string(),
            url: String::new(),
        });
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_links() {
        let p = profile();
        assert_eq!(p.mailto(), "mailto:ada@example.com");
        assert_eq!(
            p.contact.phone.as_ref().map(Phone::tel_uri).as_deref(),
            Some("tel:+442079460000")
        );
    }
}
