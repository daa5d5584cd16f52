//! Error types for contributor validation and parsing.

use thiserror::Error;

/// Errors returned while constructing contributor records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContributorDomainError {
    /// The contributor identifier is empty after trimming.
    #[error("contributor identifier must not be empty")]
    EmptyId,

    /// The display name is empty after trimming.
    #[error("contributor name must not be empty")]
    EmptyName,

    /// The handle is empty after trimming and removing a leading `@`.
    #[error("contributor handle must not be empty")]
    EmptyHandle,

    /// The classification value is not recognised.
    #[error(transparent)]
    Classification(#[from] ParseClassificationError),
}

/// Error returned while parsing a contributor classification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown contributor classification: {0}")]
pub struct ParseClassificationError(pub String);
