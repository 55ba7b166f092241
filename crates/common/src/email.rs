//! Email delivery seam and in-process implementations.

use std::sync::Mutex;

/// Prefix of every successful delivery confirmation.
pub const SENT_PREFIX: &str = "Message sent:";

/// Confirmation returned when there is nobody to deliver to.
pub const NO_RECIPIENT: &str = "Message not sent: no recipient";

/// Sends a message and returns a human-readable confirmation.
///
/// Success is signalled by a confirmation starting with [`SENT_PREFIX`];
/// callers inspect the text rather than an error value.
pub trait EmailService: Send + Sync {
    fn send_message(&self, subject: &str, message: &str, recipient: &str) -> String;
}

fn confirmation(subject: &str, recipient: &str) -> Option<String> {
    if recipient.trim().is_empty() {
        return None;
    }
    Some(format!("{SENT_PREFIX} {subject}"))
}

/// Emits each message as a tracing event instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEmailService;

impl EmailService for TracingEmailService {
    fn send_message(&self, subject: &str, message: &str, recipient: &str) -> String {
        match confirmation(subject, recipient) {
            Some(confirmation) => {
                tracing::info!(subject, recipient, body_len = message.len(), "email sent");
                confirmation
            }
            None => {
                tracing::warn!(subject, "email dropped: no recipient");
                NO_RECIPIENT.to_string()
            }
        }
    }
}

/// A message captured by [`InMemoryEmailService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub subject: String,
    pub message: String,
    pub recipient: String,
}

/// In-memory outbox for tests/dev.
///
/// Only deliverable messages (non-blank recipient) are recorded.
#[derive(Debug, Default)]
pub struct InMemoryEmailService {
    outbox: Mutex<Vec<SentMessage>>,
}

impl InMemoryEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        match self.outbox.lock() {
            Ok(outbox) => outbox.clone(),
            Err(_) => vec![],
        }
    }
}

impl EmailService for InMemoryEmailService {
    fn send_message(&self, subject: &str, message: &str, recipient: &str) -> String {
        let Some(confirmation) = confirmation(subject, recipient) else {
            return NO_RECIPIENT.to_string();
        };

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(SentMessage {
                subject: subject.to_string(),
                message: message.to_string(),
                recipient: recipient.to_string(),
            });
        }

        confirmation
    }
}
