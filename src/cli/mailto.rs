//! Compose a contact message as a `mailto:` link.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::handoff;
use crate::state::{ComposeRequest, ContactForm};
use clap::Args;
use serde::Serialize;

/// Build the compose link the contact form would open
#[derive(Debug, Clone, Args)]
pub struct MailtoArgs {
    /// Sender name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message body
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Hand the link to the default mail client
    #[arg(long)]
    pub open: bool,

    /// Output recipient, subject, body and URI as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct MailtoOutput<'a> {
    #[serde(flatten)]
    request: &'a ComposeRequest,
    uri: &'a str,
}

impl MailtoArgs {
    /// Execute the mailto command
    pub fn execute(&self) -> CliResult<()> {
        let form = ContactForm::new(&self.name, &self.email, &self.message);
        if form.is_blank() {
            return Err(CliError::validation(
                "Nothing to send. Provide at least one of --name, --email or --message",
            ));
        }

        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let content = config
            .load_content()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let request = form.compose(&content.profile.contact.email);
        let uri = request.to_uri();

        if self.json {
            print_json(&MailtoOutput {
                request: &request,
                uri: &uri,
            })?;
        } else {
            println!("{uri}");
        }

        if self.open {
            handoff::open_external(&uri).map_err(|e| CliError::io(format!("{e:#}")))?;
        }

        Ok(())
    }
}
