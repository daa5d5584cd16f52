//! Port contracts for repository selection.
//!
//! Ports define infrastructure-agnostic interfaces used by the selector.

pub mod connector;

pub use connector::{ConnectorError, ConnectorResult, RepositoryConnector};
