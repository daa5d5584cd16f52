//! Error types for repository reference validation.

use thiserror::Error;

/// Errors returned while validating a submitted repository URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryReferenceError {
    /// The input is empty after trimming.
    #[error("repository URL must not be empty")]
    EmptyInput,

    /// The input does not look like `https://github.com/<owner>/<name>`.
    #[error("invalid GitHub repository URL '{0}'")]
    InvalidFormat(String),
}
