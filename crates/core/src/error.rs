//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every rejected input in the workspace is reported through this type.
/// Diagnostics that still produce a value travel in
/// [`OperationResult`](crate::OperationResult) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a product name out of bounds).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required argument was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was outside its accepted range.
    #[error("argument out of range: {0}")]
    OutOfRange(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing(argument: &'static str) -> Self {
        Self::MissingArgument(argument)
    }

    pub fn out_of_range(argument: &'static str) -> Self {
        Self::OutOfRange(argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_argument() {
        assert_eq!(
            DomainError::missing("product").to_string(),
            "missing required argument: product"
        );
        assert_eq!(
            DomainError::out_of_range("quantity").to_string(),
            "argument out of range: quantity"
        );
        assert_eq!(
            DomainError::validation("too short").to_string(),
            "validation failed: too short"
        );
    }
}
