//! Export command for writing the static site.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::render::export_site;
use crate::state::{restore_theme, ThemePreference};
use crate::store::FileStore;
use clap::Args;
use std::path::PathBuf;

/// Write the portfolio as plain HTML files
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output directory (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out: PathBuf,

    /// Theme baked into the pages (defaults to the stored preference)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Base path for images and documents (defaults to `content.asset_base`)
    #[arg(long, value_name = "PATH")]
    pub asset_base: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let content = config
            .load_content()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let theme = match &self.theme {
            Some(name) => name.parse::<ThemePreference>().map_err(|()| {
                CliError::validation(format!("Invalid theme '{name}'. Expected 'light' or 'dark'"))
            })?,
            None => {
                let store = FileStore::open_default()
                    .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;
                restore_theme(&store)
            }
        };

        let asset_base = self
            .asset_base
            .as_deref()
            .unwrap_or(&config.content.asset_base);

        let written = export_site(
            &content,
            theme,
            asset_base,
            config.ui.page_lookahead_px,
            &self.out,
        )
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        for path in &written {
            println!("{}", path.display());
        }
        println!("✓ Exported {} page(s) ({theme} theme)", written.len());
        Ok(())
    }
}
