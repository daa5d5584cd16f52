//! Contributor registry.
//!
//! Contributor records carry aggregate activity counts and an externally
//! assigned [`domain::Classification`]. The registry loads them for the
//! selected repository through a record source; classification is never
//! derived from the counts.
//!
//! - Domain types in [`domain`]
//! - Sample data in [`adapters`]
//! - The registry view in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
