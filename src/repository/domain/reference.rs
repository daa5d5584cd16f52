//! Validated GitHub repository reference.

use super::RepositoryReferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme and host every accepted repository URL starts with.
const GITHUB_PREFIX: &str = "https://github.com/";

/// Validated URL of a GitHub repository.
///
/// The accepted shape is `https://github.com/<owner>/<name>` with an optional
/// trailing slash, where owner and name consist of ASCII letters, digits,
/// underscores, dots, or hyphens. The URL text is kept exactly as submitted
/// (after trimming), so a trailing slash survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryReference {
    url: String,
}

impl RepositoryReference {
    /// Parses and validates raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryReferenceError::EmptyInput`] when the input is
    /// blank after trimming, or [`RepositoryReferenceError::InvalidFormat`]
    /// when it does not match the GitHub repository URL shape.
    pub fn parse(raw: &str) -> Result<Self, RepositoryReferenceError> {
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RepositoryReferenceError::EmptyInput);
        }

        let invalid = || RepositoryReferenceError::InvalidFormat(normalized.to_owned());
        let remainder = normalized.strip_prefix(GITHUB_PREFIX).ok_or_else(invalid)?;
        let path = remainder.strip_suffix('/').unwrap_or(remainder);

        let mut segments = path.split('/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();

        if has_more_segments || !is_valid_segment(owner) || !is_valid_segment(name) {
            return Err(invalid());
        }

        Ok(Self {
            url: normalized.to_owned(),
        })
    }

    /// Returns the URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments().nth(1).unwrap_or_default()
    }

    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.url
            .strip_prefix(GITHUB_PREFIX)
            .unwrap_or_default()
            .split('/')
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

impl TryFrom<String> for RepositoryReference {
    type Error = RepositoryReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepositoryReference> for String {
    fn from(value: RepositoryReference) -> Self {
        value.url
    }
}

impl AsRef<str> for RepositoryReference {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
