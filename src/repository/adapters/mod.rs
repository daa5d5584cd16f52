//! Adapter implementations for repository selection ports.

pub mod simulated;

pub use simulated::{DEFAULT_CONNECT_DELAY, SimulatedConnector, SimulatedOutcome};
