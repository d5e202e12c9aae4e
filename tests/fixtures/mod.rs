//! Shared test fixtures for end-to-end tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use folio::config::Config;
use folio::models::{NavItem, Project, SiteContent};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the folio binary
pub fn folio_bin() -> String {
    std::env::var("CARGO_BIN_EXE_folio").unwrap_or_else(|_| "target/release/folio".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share state between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(folio_bin());
    cmd.env("FOLIO_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Small content table with two projects and a nav entry whose section is
/// never laid out.
pub fn test_content() -> SiteContent {
    let mut content = SiteContent::builtin();
    content.profile.name = "Test Person".to_string();
    content.profile.contact.email = "test@example.com".to_string();
    content.projects = vec![
        Project {
            title: "Alpha".to_string(),
            category: "Tool".to_string(),
            description: "First project".to_string(),
            tags: vec!["rust".to_string()],
            demo: Some("https://alpha.example".to_string()),
            repo: None,
            image: Some("alpha.png".to_string()),
        },
        Project {
            title: "Beta".to_string(),
            category: "Study".to_string(),
            description: "Second project".to_string(),
            tags: Vec::new(),
            demo: None,
            repo: Some("https://example.com/beta".to_string()),
            image: None,
        },
    ];
    content.nav.push(NavItem::new("Blog", "#blog"));
    content
}

/// Writes `content` as TOML into `dir` and returns the file path.
pub fn write_content_file(dir: &Path, content: &SiteContent) -> PathBuf {
    let path = dir.join("content.toml");
    fs::write(&path, content.to_toml_string().expect("serialize content"))
        .expect("write content file");
    path
}

/// Config directory whose config points at a written copy of [`test_content`].
pub fn config_dir_with_content() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let content_path = write_content_file(temp.path(), &test_content());

    let mut config = Config::default();
    config.content.path = Some(content_path);
    config
        .save_to(&temp.path().join("config.toml"))
        .expect("save config");
    temp
}
