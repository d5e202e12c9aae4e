//! Contact form and the `mailto:` compose request it produces.
//!
//! Nothing is sent from here. The form only builds a URI that the user's own
//! mail client opens.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

/// Subject line prefix; the sender name follows it.
pub const SUBJECT_PREFIX: &str = "Portfolio contact from ";

/// The three free-text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Sender email
    #[serde(default)]
    pub email: String,
    /// Message text
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Creates a filled-in form.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// True when nothing has been typed.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.trim().is_empty()
    }

    /// Subject line derived from the form.
    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX}{}", self.name)
    }

    /// Body derived from the form: the message, a blank line, then the sender.
    pub fn body(&self) -> String {
        if self.email.is_empty() {
            format!("{}\n\n{}", self.message, self.name)
        } else {
            format!("{}\n\n{} <{}>", self.message, self.name, self.email)
        }
    }

    /// Builds the compose request addressed to `recipient`.
    pub fn compose(&self, recipient: &str) -> ComposeRequest {
        ComposeRequest {
            recipient: recipient.to_string(),
            subject: self.subject(),
            body: self.body(),
        }
    }
}

/// A pre-filled email ready to hand to a mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeRequest {
    /// Recipient address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

impl ComposeRequest {
    /// Renders the `mailto:` URI.
    ///
    /// Subject and body are percent-encoded with spaces as `%20` (mail
    /// clients do not all treat `+` as a space), so any input survives a
    /// decode unchanged.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Parses a `mailto:` URI back into its parts.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let url = Url::parse(uri).context(format!("Invalid mailto URI: {uri}"))?;
        if url.scheme() != "mailto" {
            anyhow::bail!("Expected a mailto URI, got scheme '{}'", url.scheme());
        }

        let mut subject = String::new();
        let mut body = String::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "subject" => subject = value.into_owned(),
                "body" => body = value.into_owned(),
                _ => {}
            }
        }

        Ok(Self {
            recipient: url.path().to_string(),
            subject,
            body,
        })
    }
}

/// Percent-encodes one query component.
///
/// `form_urlencoded` writes spaces as `+` and escapes a literal `+` as `%2B`,
/// so rewriting the remaining `+` to `%20` is lossless.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_special_characters() {
        let form = ContactForm::new("A&B", "a@b.example", "line1\nline2");
        let request = form.compose("owner@example.com");
        let uri = request.to_uri();

        assert!(uri.starts_with("mailto:owner@example.com?subject="));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains("A&B"));

        let parsed = ComposeRequest::from_uri(&uri).unwrap();
        assert_eq!(parsed, request);
        assert_eq!(parsed.subject, "Portfolio contact from A&B");
        assert!(parsed.body.starts_with("line1\nline2\n\n"));
        assert!(parsed.body.ends_with("A&B <a@b.example>"));
    }

    #[test]
    fn test_round_trip_awkward_input() {
        let inputs = [
            "plus+sign",
            "percent 100%",
            "query?subject=x&body=y",
            "unicode: naïve café — ✓",
            "  leading and trailing  ",
            "#hash",
            "",
        ];
        for input in inputs {
            let request = ContactForm::new(input, "x@y.z", input).compose("me@example.com");
            let parsed = ComposeRequest::from_uri(&request.to_uri()).unwrap();
            assert_eq!(parsed, request, "input {input:?}");
        }
    }

    #[test]
    fn test_spaces_encoded_as_percent_20() {
        let uri = ContactForm::new("Ada Lovelace", "", "hi there")
            .compose("me@example.com")
            .to_uri();
        assert!(uri.contains("Ada%20Lovelace"));
        assert!(!uri.contains('+'));
    }

    #[test]
    fn test_body_without_email() {
        let form = ContactForm::new("Ada", "", "Hello");
        assert_eq!(form.body(), "Hello\n\nAda");
    }

    #[test]
    fn test_is_blank() {
        assert!(ContactForm::default().is_blank());
        assert!(ContactForm::new(" ", "", "\n").is_blank());
        assert!(!ContactForm::new("", "", "hi").is_blank());
    }

    #[test]
    fn test_from_uri_rejects_other_schemes() {
        assert!(ComposeRequest::from_uri("https://example.com/?subject=x").is_err());
        assert!(ComposeRequest::from_uri("not a uri").is_err());
    }
}
