//! Built-in sample contributors.

use crate::{
    contributor::domain::{
        Classification, ContributionCounts, ContributorDomainError, ContributorRecord,
        NewContributor,
    },
    view::adapters::StaticSource,
};
use std::time::Duration;

/// Default latency of the sample contributor source.
pub const DEFAULT_CONTRIBUTOR_DELAY: Duration = Duration::from_millis(1000);

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

struct Sample {
    id: &'static str,
    name: &'static str,
    handle: &'static str,
    counts: ContributionCounts,
    classification: Classification,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        id: "1",
        name: "Alex Johnson",
        handle: "alexj",
        counts: ContributionCounts::new(156, 23, 45),
        classification: Classification::Maintainer,
    },
    Sample {
        id: "2",
        name: "Sarah Chen",
        handle: "sarah-dev",
        counts: ContributionCounts::new(89, 12, 28),
        classification: Classification::Core,
    },
    Sample {
        id: "3",
        name: "Mike Rodriguez",
        handle: "mike-r",
        counts: ContributionCounts::new(34, 8, 15),
        classification: Classification::Regular,
    },
    Sample {
        id: "4",
        name: "Emma Wilson",
        handle: "emmaw",
        counts: ContributionCounts::new(7, 3, 2),
        classification: Classification::Newcomer,
    },
];

/// Returns the sample contributors served when no fixture file is given.
///
/// # Errors
///
/// Returns [`ContributorDomainError`] if a sample fails validation.
pub fn sample_contributors() -> Result<Vec<ContributorRecord>, ContributorDomainError> {
    SAMPLES
        .iter()
        .map(|sample| {
            ContributorRecord::new(NewContributor {
                id: sample.id.to_owned(),
                name: sample.name.to_owned(),
                handle: sample.handle.to_owned(),
                avatar: PLACEHOLDER_AVATAR.to_owned(),
                counts: sample.counts,
                classification: sample.classification,
            })
        })
        .collect()
}

/// Creates a source serving the sample contributors after `delay`.
///
/// # Errors
///
/// Returns [`ContributorDomainError`] if a sample fails validation.
pub fn sample_source(
    delay: Duration,
) -> Result<StaticSource<ContributorRecord>, ContributorDomainError> {
    Ok(StaticSource::new(sample_contributors()?, delay))
}
