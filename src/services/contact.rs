//! Contact form relay: validation and provider dispatch.
//!
//! The pipeline mirrors the form's client-side constraints so that a bypassed
//! browser check still cannot produce a malformed relay email.

use serde::Deserialize;

use crate::config::ContactConfig;
use crate::services::mailer::{Mailer, MailerError, OutgoingEmail};
use crate::services::message;

pub const MAX_MESSAGE_CHARS: usize = 5000;

/// JSON body of `POST /api/contact`. Absent fields deserialize to empty
/// strings and fail the required-field check, matching a blank submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot. Humans never see this field; bots fill it.
    pub company: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields.")]
    MissingFields,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Message is too long.")]
    MessageTooLong,
    #[error("Contact form is not configured yet.")]
    NotConfigured,
    #[error("{0}")]
    Upstream(String),
}

impl From<MailerError> for ContactError {
    fn from(error: MailerError) -> Self {
        match error {
            MailerError::Delivery(message) if !message.trim().is_empty() => Self::Upstream(message),
            MailerError::Delivery(_) => Self::Upstream("Failed to send message.".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Relayed to the provider.
    Sent,
    /// Honeypot tripped; reported as success, nothing sent.
    Discarded,
}

/// Validate a submission and relay it through the provider.
///
/// `wiring` is `None` when the provider secrets are not configured; that is a
/// server error regardless of payload validity. The honeypot check runs first
/// so spam cannot probe configuration state.
///
/// # Errors
///
/// Returns a [`ContactError`] describing the first failed check, or the
/// provider's delivery failure.
pub async fn relay(
    wiring: Option<(&ContactConfig, &dyn Mailer)>,
    payload: &ContactPayload,
) -> Result<ContactOutcome, ContactError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let body = payload.message.trim();

    if !payload.company.trim().is_empty() {
        tracing::debug!("honeypot tripped, discarding submission");
        return Ok(ContactOutcome::Discarded);
    }

    let Some((config, mailer)) = wiring else {
        return Err(ContactError::NotConfigured);
    };

    if name.is_empty() || email.is_empty() || body.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    if body.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ContactError::MessageTooLong);
    }

    let outgoing = OutgoingEmail {
        from: config.from_email.clone(),
        to: config.to_email.clone(),
        subject: message::subject(name),
        text: message::text_body(name, email, body),
        html: message::html_body(name, email, body),
        reply_to: Some(email.to_owned()),
    };
    mailer.send(&outgoing).await?;

    if config.auto_reply {
        let reply = OutgoingEmail {
            from: config.from_email.clone(),
            to: email.to_owned(),
            subject: message::auto_reply_subject(),
            text: message::auto_reply_text(name),
            html: message::auto_reply_html(name),
            reply_to: None,
        };
        // The visitor's message is already relayed; a failed acknowledgement
        // must not fail the request.
        if let Err(e) = mailer.send(&reply).await {
            tracing::warn!(error = %e, "auto-reply delivery failed");
        }
    }

    Ok(ContactOutcome::Sent)
}

/// Accepted email shape: one `@`, non-empty local part, dot-separated domain
/// with non-empty labels, no whitespace or control characters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
