//! Contributor record sources.

pub mod memory;

pub use memory::{DEFAULT_CONTRIBUTOR_DELAY, sample_contributors, sample_source};
