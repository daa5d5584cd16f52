//! Identifier type for contributors.

use super::ContributorDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a contributor record, unique within one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributorId(String);

impl ContributorId {
    /// Creates a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContributorDomainError::EmptyId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ContributorDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ContributorDomainError::EmptyId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContributorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
