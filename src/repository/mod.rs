//! Repository selection.
//!
//! Turns free-text input into a validated [`domain::RepositoryReference`],
//! runs the simulated remote round-trip through the
//! [`ports::RepositoryConnector`] port and reports every outcome as a
//! notification. The module follows the same layering as the rest of the
//! crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
