//! Contributor record and its activity counts.

use super::{Classification, ContributorDomainError, ContributorId};
use serde::Serialize;

/// Aggregate activity of a contributor against one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContributionCounts {
    /// Number of commits.
    pub commits: u32,
    /// Number of issues opened.
    pub issues: u32,
    /// Number of pull requests opened.
    pub pull_requests: u32,
}

impl ContributionCounts {
    /// Creates a set of counts.
    #[must_use]
    pub const fn new(commits: u32, issues: u32, pull_requests: u32) -> Self {
        Self {
            commits,
            issues,
            pull_requests,
        }
    }
}

/// Parameter object for constructing a [`ContributorRecord`] from raw
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContributor {
    /// Record identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account handle, with or without a leading `@`.
    pub handle: String,
    /// Avatar reference (URL or asset path).
    pub avatar: String,
    /// Activity counts.
    pub counts: ContributionCounts,
    /// Externally assigned classification.
    pub classification: Classification,
}

/// One person's aggregate activity against a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorRecord {
    id: ContributorId,
    name: String,
    handle: String,
    avatar: String,
    counts: ContributionCounts,
    classification: Classification,
}

impl ContributorRecord {
    /// Creates a validated contributor record.
    ///
    /// Names and handles are trimmed and a leading `@` is stripped from the
    /// handle.
    ///
    /// # Errors
    ///
    /// Returns [`ContributorDomainError`] when the identifier, name, or
    /// handle is blank.
    pub fn new(data: NewContributor) -> Result<Self, ContributorDomainError> {
        let id = ContributorId::new(data.id)?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(ContributorDomainError::EmptyName);
        }

        let handle = data.handle.trim().trim_start_matches('@');
        if handle.is_empty() {
            return Err(ContributorDomainError::EmptyHandle);
        }

        Ok(Self {
            id,
            name: name.to_owned(),
            handle: handle.to_owned(),
            avatar: data.avatar.trim().to_owned(),
            counts: data.counts,
            classification: data.classification,
        })
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &ContributorId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the handle without the leading `@`.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Returns the avatar reference.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the activity counts.
    #[must_use]
    pub const fn counts(&self) -> ContributionCounts {
        self.counts
    }

    /// Returns the classification.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Returns the first letter of every word of the display name.
    ///
    /// Used as the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        initials_of(&self.name)
    }

    /// Returns the handle prefixed with `@`.
    #[must_use]
    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}

/// Returns the first character of each whitespace-separated word.
#[must_use]
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
