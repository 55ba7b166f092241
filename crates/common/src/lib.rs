//! Collaborators shared by the Acme business types.
//!
//! Business operations never construct their collaborators; they receive a
//! [`Services`] bundle instead, so tests and the console binary can plug in
//! whatever email/action-log implementation they need.

pub mod action_log;
pub mod config;
pub mod email;
pub mod services;

pub use action_log::{ActionLog, TracingActionLog};
pub use config::AcmeConfig;
pub use email::{
    EmailService, InMemoryEmailService, NO_RECIPIENT, SENT_PREFIX, SentMessage, TracingEmailService,
};
pub use services::Services;
