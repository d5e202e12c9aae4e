//! Hands URIs (mailto, resume, project links) to the platform opener.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::info;

/// Opens `uri` with the desktop's default handler.
///
/// The child process is spawned and not waited on; whatever the handler does
/// next is outside this program.
pub fn open_external(uri: &str) -> Result<()> {
    info!("Opening {uri}");
    opener_command(uri)
        .spawn()
        .context(format!("Failed to launch a handler for {uri}"))?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", uri]);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(uri);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(uri);
    cmd
}
