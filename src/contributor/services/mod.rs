//! Application services for contributors.

mod registry;

pub use registry::ContributorRegistry;
