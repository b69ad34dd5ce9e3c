//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two families: argument errors (a value failed validation) and key errors
/// (a name is missing from, or already present in, the registry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative price or quantity).
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested item does not exist.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item with the same name already exists.
    #[error("Item already exists: {0}")]
    DuplicateKey(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn duplicate_key(name: impl Into<String>) -> Self {
        Self::DuplicateKey(name.into())
    }

    /// `true` for `NotFound` and `DuplicateKey`.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::DuplicateKey(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
