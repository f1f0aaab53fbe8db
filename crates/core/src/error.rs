//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only contract violations end up here. Expected outcomes such as a full
/// inventory or an unparseable record are reported through return values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an inventory with zero slots).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_wrap_message() {
        assert_eq!(
            DomainError::validation("size must be at least 1"),
            DomainError::Validation("size must be at least 1".to_string())
        );
        assert_eq!(
            DomainError::validation("item name cannot be empty").to_string(),
            "validation failed: item name cannot be empty"
        );
    }
}
