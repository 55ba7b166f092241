//! Action log seam.

/// Records a human-readable action performed by a business operation.
pub trait ActionLog: Send + Sync {
    /// Record `action`, returning the logged line.
    fn log_action(&self, action: &str) -> String;
}

/// Writes actions to the `tracing` pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingActionLog;

impl ActionLog for TracingActionLog {
    fn log_action(&self, action: &str) -> String {
        let line = format!("Action: {action}");
        tracing::info!(action, "action logged");
        line
    }
}
