//! Branding and application identity configuration.
//!
//! This module centralizes the names and paths that identify the application
//! so the binaries, the config directory and help text stay in agreement.

/// The human-readable display name of the application.
///
/// Used in:
/// - The terminal title bar
/// - Page footers of the web preview and static export
/// - CLI help text
pub const APP_DISPLAY_NAME: &str = "Folio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (config, preferences).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Folio";

/// Environment variable that overrides the config directory.
///
/// Integration tests point this at a temporary directory so they never touch
/// the user's real preferences.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Personal portfolio for the terminal and the browser";

/// Footer line shown under rendered pages.
pub fn footer_line(owner: &str) -> String {
    format!("© {owner} · built with {APP_DISPLAY_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name or data dir
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(CONFIG_DIR_ENV.starts_with("FOLIO_"));
    }

    #[test]
    fn test_footer_line() {
        let footer = footer_line("Madhav");
        assert!(footer.contains("Madhav"));
        assert!(footer.ends_with(APP_DISPLAY_NAME));
    }
}
