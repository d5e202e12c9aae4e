//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::SiteContent;

/// Default lookahead margin, in terminal rows, for active-section tracking.
pub const DEFAULT_LOOKAHEAD_ROWS: u32 = 4;

/// Default lookahead margin, in CSS pixels, for the browser pages.
pub const DEFAULT_PAGE_LOOKAHEAD_PX: u32 = 120;

/// Where the portfolio content and its assets come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content TOML file; the built-in content is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Base path asset references are resolved against (e.g., "/" or "/portfolio")
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    /// Directory served as static assets by the web preview
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
}

fn default_asset_base() -> String {
    "/".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            asset_base: default_asset_base(),
            asset_dir: None,
        }
    }
}

/// Active-section tracking preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How far below the top edge a section may start and still count as
    /// "scrolled into", in rows
    #[serde(default = "default_lookahead")]
    pub lookahead_margin: u32,
    /// The same margin for the HTML pages, in CSS pixels
    #[serde(default = "default_page_lookahead")]
    pub page_lookahead_px: u32,
}

fn default_lookahead() -> u32 {
    DEFAULT_LOOKAHEAD_ROWS
}

const fn default_page_lookahead() -> u32 {
    DEFAULT_PAGE_LOOKAHEAD_PX
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            lookahead_margin: default_lookahead(),
            page_lookahead_px: default_page_lookahead(),
        }
    }
}

/// Web preview server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3030
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
///
/// `FOLIO_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Content source settings
    #[serde(default)]
    pub content: ContentConfig,
    /// Terminal UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Web preview settings
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `FOLIO_CONFIG_DIR`, otherwise:
    /// - Linux: `~/.config/Folio/`
    /// - macOS: `~/Library/Application Support/Folio/`
    /// - Windows: `%APPDATA%\Folio\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - content file exists (if set)
    /// - asset base is not empty
    /// - asset directory exists and is a directory (if set)
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.content.path {
            if !path.is_file() {
                anyhow::bail!("Content file does not exist: {}", path.display());
            }
        }

        if self.content.asset_base.trim().is_empty() {
            anyhow::bail!("Asset base cannot be empty (use \"/\" for the site root)");
        }

        if let Some(dir) = &self.content.asset_dir {
            if !dir.is_dir() {
                anyhow::bail!("Asset directory does not exist: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Loads the configured content, or the built-in content when no file is set.
    pub fn load_content(&self) -> Result<SiteContent> {
        match &self.content.path {
            Some(path) => SiteContent::load(path),
            None => Ok(SiteContent::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.content.path, None);
        assert_eq!(config.content.asset_base, "/");
        assert_eq!(config.ui.lookahead_margin, DEFAULT_LOOKAHEAD_ROWS);
        assert_eq!(config.ui.page_lookahead_px, DEFAULT_PAGE_LOOKAHEAD_PX);
        assert_eq!(config.web.port, 3030);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_content_path() {
        let temp_dir = TempDir::new().unwrap();
        let content_path = temp_dir.path().join("content.toml");

        let mut config = Config::new();
        config.content.path = Some(content_path.clone());
        assert!(config.validate().is_err());

        fs::write(&content_path, "").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_asset_dir() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        config.content.asset_dir = Some(temp_dir.path().join("public"));
        assert!(config.validate().is_err());

        fs::create_dir(temp_dir.path().join("public")).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_asset_base() {
        let mut config = Config::new();
        config.content.asset_base = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.lookahead_margin = 7;
        config.web.port = 8080;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[web]\nport = 9000\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.web.port, 9000);
        assert_eq!(loaded.web.host, "127.0.0.1");
        assert_eq!(loaded.content.asset_base, "/");
    }

    #[test]
    fn test_config_load_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "not = [valid").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_content_builtin() {
        let content = Config::new().load_content().unwrap();
        assert_eq!(content, SiteContent::builtin());
    }
}
