//! Outbound email through the Resend API.
//!
//! Handlers talk to the [`Mailer`] trait so tests can substitute a recording
//! mock; [`ResendMailer`] is the production implementation.

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

/// One email ready for delivery. Bodies are pre-rendered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self { client: Resend::new(api_key) }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let to = [email.to.as_str()];
        let mut options = CreateEmailBaseOptions::new(&email.from, to, &email.subject)
            .with_text(&email.text)
            .with_html(&email.html);
        if let Some(reply_to) = &email.reply_to {
            options = options.with_reply(reply_to);
        }
        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| MailerError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Recording mailer. Counts every delivery attempt; optionally fails
    /// attempts starting at `fail_from` with a fixed provider message.
    pub struct MockMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        attempts: AtomicUsize,
        fail_with: Option<String>,
        fail_from: usize,
    }

    impl MockMailer {
        #[must_use]
        pub fn new() -> Self {
            Self { sent: Mutex::new(Vec::new()), attempts: AtomicUsize::new(0), fail_with: None, fail_from: 0 }
        }

        /// Every attempt fails with `message`.
        #[must_use]
        pub fn failing(message: &str) -> Self {
            Self { fail_with: Some(message.to_owned()), ..Self::new() }
        }

        /// Attempts with index >= `fail_from` fail; earlier ones succeed.
        #[must_use]
        pub fn failing_from(fail_from: usize, message: &str) -> Self {
            Self { fail_with: Some(message.to_owned()), fail_from, ..Self::new() }
        }

        #[must_use]
        pub fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }

        #[must_use]
        pub fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        /// Delivery attempts, including failed ones.
        #[must_use]
        pub fn attempt_count(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }
    }

    impl Default for MockMailer {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                if attempt >= self.fail_from {
                    return Err(MailerError::Delivery(message.clone()));
                }
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
