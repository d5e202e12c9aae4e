//! Theme preference CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::state::{restore_theme, try_commit_theme, ThemePreference, ThemeSurface};
use crate::store::{FileStore, PreferenceStore};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Read or change the stored light/dark preference
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the stored theme
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch between light and dark
    Toggle,
    /// Store a specific theme
    Set {
        /// `light` or `dark`
        #[arg(value_name = "THEME")]
        theme: String,
    },
}

#[derive(Serialize, Debug)]
struct ThemeOutput {
    theme: ThemePreference,
    stored: Option<String>,
    path: String,
}

/// Surface for the command line: remembers what it was told to show.
#[derive(Default)]
struct Printed(Option<ThemePreference>);

impl ThemeSurface for Printed {
    fn apply_theme(&mut self, theme: ThemePreference) {
        self.0 = Some(theme);
    }
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        let mut store = FileStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;

        match &self.command {
            ThemeCommand::Show { json } => {
                let theme = restore_theme(&store);
                if *json {
                    print_json(&ThemeOutput {
                        theme,
                        stored: store.get(crate::state::THEME_KEY),
                        path: store.path().display().to_string(),
                    })?;
                } else {
                    println!("{} {theme}", theme.glyph());
                }
                Ok(())
            }
            ThemeCommand::Toggle => {
                let next = restore_theme(&store).toggled();
                apply(next, &mut store)
            }
            ThemeCommand::Set { theme } => {
                let theme: ThemePreference = theme.parse().map_err(|()| {
                    CliError::validation(format!(
                        "Invalid theme '{theme}'. Expected 'light' or 'dark'"
                    ))
                })?;
                apply(theme, &mut store)
            }
        }
    }
}

fn apply(theme: ThemePreference, store: &mut FileStore) -> CliResult<()> {
    let mut printed = Printed::default();
    try_commit_theme(theme, store, &mut printed).map_err(|e| {
        CliError::io(format!(
            "Failed to save theme to {}: {e:#}",
            store.path().display()
        ))
    })?;

    if let Some(shown) = printed.0 {
        println!("{} {shown}", shown.glyph());
    }
    Ok(())
}
