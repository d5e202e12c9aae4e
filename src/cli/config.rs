//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Content TOML file
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Go back to the built-in content
    #[arg(long, conflicts_with = "content")]
    builtin_content: bool,

    /// Base path image references are resolved against
    #[arg(long, value_name = "PATH")]
    asset_base: Option<String>,

    /// Local directory the preview server serves assets from
    #[arg(long, value_name = "DIR")]
    asset_dir: Option<PathBuf>,

    /// Active-section lookahead in terminal rows
    #[arg(long, value_name = "ROWS")]
    lookahead: Option<u32>,

    /// Lookahead margin for the HTML pages, in pixels
    #[arg(long, value_name = "PX")]
    page_lookahead: Option<u32>,

    /// Preview server host
    #[arg(long)]
    host: Option<String>,

    /// Preview server port
    #[arg(long)]
    port: Option<u16>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.content.is_none()
            && !self.builtin_content
            && self.asset_base.is_none()
            && self.asset_dir.is_none()
            && self.lookahead.is_none()
            && self.page_lookahead.is_none()
            && self.host.is_none()
            && self.port.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified. See `folio config set --help`",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.content {
            config.content.path = Some(path.clone());
        }
        if self.builtin_content {
            config.content.path = None;
        }
        if let Some(base) = &self.asset_base {
            config.content.asset_base.clone_from(base);
        }
        if let Some(dir) = &self.asset_dir {
            config.content.asset_dir = Some(dir.clone());
        }
        if let Some(rows) = self.lookahead {
            config.ui.lookahead_margin = rows;
        }
        if let Some(px) = self.page_lookahead {
            config.ui.page_lookahead_px = px;
        }
        if let Some(host) = &self.host {
            config.web.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.web.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        // A content file must also parse before it is accepted
        config
            .load_content()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Configuration saved");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Folio Configuration");
    println!("===================");
    println!();

    println!("Content:");
    match &config.content.path {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: (built-in)"),
    }
    println!("  Asset base: {}", config.content.asset_base);
    match &config.content.asset_dir {
        Some(dir) => println!("  Asset dir: {}", dir.display()),
        None => println!("  Asset dir: (not configured)"),
    }
    println!();

    println!("UI:");
    println!("  Lookahead: {} rows", config.ui.lookahead_margin);
    println!("  Page lookahead: {} px", config.ui.page_lookahead_px);
    println!();

    println!("Web:");
    println!("  Address: {}:{}", config.web.host, config.web.port);

    if let Ok(path) = Config::config_file_path() {
        println!();
        println!("Config file: {}", path.display());
    }
}
