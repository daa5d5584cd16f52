//! Domain model for contributors.

mod classification;
mod contributor;
mod error;
mod ids;

pub use classification::Classification;
pub use contributor::{ContributionCounts, ContributorRecord, NewContributor, initials_of};
pub use error::{ContributorDomainError, ParseClassificationError};
pub use ids::ContributorId;
