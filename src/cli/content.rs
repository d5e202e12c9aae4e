//! Content inspection CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::SiteContent;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Inspect and check the portfolio content
#[derive(Args, Debug)]
pub struct ContentArgs {
    #[command(subcommand)]
    command: ContentCommand,
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    /// Print the content in use
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Check a content file (defaults to the configured one)
    Validate {
        /// Content TOML file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

impl ContentArgs {
    /// Execute content subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ContentCommand::Show { json } => {
                let content = load_configured()?;
                if *json {
                    print_json(&content)
                } else {
                    let text = content
                        .to_toml_string()
                        .map_err(|e| CliError::io(format!("{e:#}")))?;
                    print!("{text}");
                    Ok(())
                }
            }
            ContentCommand::Validate { file } => {
                let (content, source) = match file {
                    Some(path) => {
                        if !path.exists() {
                            return Err(CliError::io(format!(
                                "Content file not found: {}",
                                path.display()
                            )));
                        }
                        let content = SiteContent::load(path)
                            .map_err(|e| CliError::validation(format!("{e:#}")))?;
                        (content, path.display().to_string())
                    }
                    None => (load_configured()?, "configured content".to_string()),
                };

                println!(
                    "✓ {source} is valid: {} nav item(s), {} skill group(s), {} project(s)",
                    content.nav.len(),
                    content.skills.len(),
                    content.projects.len()
                );
                Ok(())
            }
        }
    }
}

fn load_configured() -> CliResult<SiteContent> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    config
        .load_content()
        .map_err(|e| CliError::validation(format!("{e:#}")))
}
