//! Collaborator bundle handed to business operations.

use std::sync::Arc;

use crate::{AcmeConfig, ActionLog, EmailService, TracingActionLog, TracingEmailService};

/// Everything a business operation may call out to.
#[derive(Clone)]
pub struct Services {
    email: Arc<dyn EmailService>,
    actions: Arc<dyn ActionLog>,
    config: AcmeConfig,
}

impl Services {
    pub fn new(email: Arc<dyn EmailService>, actions: Arc<dyn ActionLog>) -> Self {
        Self {
            email,
            actions,
            config: AcmeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AcmeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn email(&self) -> &dyn EmailService {
        self.email.as_ref()
    }

    pub fn actions(&self) -> &dyn ActionLog {
        self.actions.as_ref()
    }

    pub fn config(&self) -> &AcmeConfig {
        &self.config
    }
}

impl Default for Services {
    /// Tracing-backed collaborators with default config.
    fn default() -> Self {
        Self::new(Arc::new(TracingEmailService), Arc::new(TracingActionLog))
    }
}

impl core::fmt::Debug for Services {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
