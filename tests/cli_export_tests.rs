//! End-to-end tests for the `export` subcommand.

mod fixtures;

use fixtures::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_writes_one_page_per_project() {
    let temp = config_dir_with_content();
    let out = temp.path().join("site");

    let output = isolated_command(
        &["export", "--out", out.to_str().unwrap(), "--theme", "dark"],
        temp.path(),
    )
    .output()
    .expect("Failed to execute");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported 2 page(s) (dark theme)"), "stdout: {stdout}");

    let index = fs::read_to_string(out.join("index.html")).expect("index.html");
    let second = fs::read_to_string(out.join("project-1.html")).expect("project-1.html");
    assert!(index.contains("class=\"dark\""));
    assert!(index.contains("Alpha"));
    assert!(second.contains("Beta"));
    // Carousel arrows link between the exported pages
    assert!(index.contains("project-1.html#projects"));
    assert!(second.contains("index.html#projects"));
    // The contact form composes the subject and body in the page
    assert!(index.contains(r#"data-recipient="test@example.com""#));
    assert!(index.contains(r#"data-subject="Portfolio contact from ""#));
    assert!(index.contains(r#"data-lookahead="120""#));
}

#[test]
fn test_export_uses_stored_theme_by_default() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    fs::write(temp.path().join("preferences.toml"), "theme = \"dark\"\n").unwrap();

    let output = isolated_command(&["export", "--out", out.to_str().unwrap()], temp.path())
        .output()
        .expect("Failed to execute");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("(dark theme)"));
}

#[test]
fn test_export_rejects_invalid_theme() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");

    let output = isolated_command(
        &["export", "--out", out.to_str().unwrap(), "--theme", "blue"],
        temp.path(),
    )
    .output()
    .expect("Failed to execute");

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}
