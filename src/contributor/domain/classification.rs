//! Contributor classification.

use super::ParseClassificationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed contributor category, assigned by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Maintains the project.
    Maintainer,
    /// Member of the core team.
    Core,
    /// Contributes regularly.
    Regular,
    /// Recently started contributing.
    Newcomer,
}

impl Classification {
    /// All classifications, from most to least involved.
    pub const ALL: [Self; 4] = [Self::Maintainer, Self::Core, Self::Regular, Self::Newcomer];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maintainer => "maintainer",
            Self::Core => "core",
            Self::Regular => "regular",
            Self::Newcomer => "newcomer",
        }
    }

    /// Returns the capitalised badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintainer => "Maintainer",
            Self::Core => "Core",
            Self::Regular => "Regular",
            Self::Newcomer => "Newcomer",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Classification {
    type Error = ParseClassificationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "maintainer" => Ok(Self::Maintainer),
            "core" => Ok(Self::Core),
            "regular" => Ok(Self::Regular),
            "newcomer" => Ok(Self::Newcomer),
            _ => Err(ParseClassificationError(value.to_owned())),
        }
    }
}
