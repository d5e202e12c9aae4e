//! Folio - personal portfolio in the terminal
//!
//! Without a subcommand this opens the interactive terminal view. The
//! subcommands give scriptable access to the stored theme, the contact
//! hand-off, the content file, the static export and the configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::branding::APP_DISPLAY_NAME;
use folio::cli::{ConfigArgs, ContentArgs, ExportArgs, MailtoArgs, ThemeArgs};

/// Folio - personal portfolio in the terminal and the browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the portfolio interactively (default)
    View,
    /// Read or change the stored theme
    Theme(ThemeArgs),
    /// Compose a contact message as a mailto: link
    Mailto(MailtoArgs),
    /// Inspect and check the content
    Content(ContentArgs),
    /// Write the static HTML site
    Export(ExportArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "ratatui")]
fn run_view() -> Result<()> {
    use folio::config::Config;
    use folio::store::FileStore;
    use folio::tui;

    let config = Config::load()?;
    let content = config.load_content()?;
    let store = FileStore::open_default()?;

    let mut app_state = tui::AppState::new(content, config, store);
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting anything
    tui::restore_terminal(terminal)?;
    result
}

#[cfg(not(feature = "ratatui"))]
fn run_view() -> Result<()> {
    anyhow::bail!(
        "{APP_DISPLAY_NAME} was built without the terminal view. Rebuild with --features ratatui"
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::View);
    // The terminal view owns the screen, so only headless commands log
    if !matches!(command, Command::View) {
        init_tracing(cli.verbose);
    }

    let outcome = match command {
        Command::View => return run_view(),
        Command::Theme(args) => args.execute(),
        Command::Mailto(args) => args.execute(),
        Command::Content(args) => args.execute(),
        Command::Export(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = outcome {
        eprintln!("{APP_DISPLAY_NAME}: {e}");
        std::process::exit(e.exit_code.code());
    }
    Ok(())
}
