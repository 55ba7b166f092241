//! Value + diagnostic message pair returned by business operations.

use serde::{Deserialize, Serialize};

/// Outcome of an operation that always produces a value but may also carry a
/// warning or error string for the caller.
///
/// An empty message means the operation had nothing to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    value: T,
    message: String,
}

impl<T> OperationResult<T> {
    pub fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }

    /// Result with no diagnostic attached.
    pub fn clean(value: T) -> Self {
        Self::new(value, String::new())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn into_parts(self) -> (T, String) {
        (self.value, self.message)
    }
}
