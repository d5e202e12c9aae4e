//! CLI command handlers for Folio.
//!
//! Headless, scriptable access to the same state and content the terminal
//! view uses: the stored theme, mail composition, content checks, static
//! export and configuration.

pub mod common;
pub mod config;
pub mod content;
pub mod export;
pub mod mailto;
pub mod theme;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use content::ContentArgs;
pub use export::ExportArgs;
pub use mailto::MailtoArgs;
pub use theme::ThemeArgs;
