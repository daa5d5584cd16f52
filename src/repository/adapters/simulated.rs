//! Simulated connector standing in for the GitHub API.

use crate::repository::{
    domain::RepositoryReference,
    ports::{ConnectorError, ConnectorResult, RepositoryConnector},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default round-trip delay of the simulated connector.
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);

/// Result produced by a [`SimulatedConnector`] once its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatedOutcome {
    /// Every connection succeeds.
    #[default]
    Succeed,
    /// Every connection fails with [`ConnectorError::SimulatedFailure`].
    Fail,
}

/// Connector that sleeps for a fixed delay and then reports a fixed outcome.
///
/// No network traffic is generated; the delay models the latency of a real
/// repository lookup.
#[derive(Debug, Clone)]
pub struct SimulatedConnector {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedConnector {
    /// Creates a connector that succeeds after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SimulatedOutcome::Succeed,
        }
    }

    /// Sets the outcome reported after the delay.
    #[must_use]
    pub const fn with_outcome(mut self, outcome: SimulatedOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_DELAY)
    }
}

#[async_trait]
impl RepositoryConnector for SimulatedConnector {
    async fn connect(&self, repository: &RepositoryReference) -> ConnectorResult<()> {
        debug!(%repository, delay_ms = self.delay.as_millis(), "simulating repository lookup");
        tokio::time::sleep(self.delay).await;

        match self.outcome {
            SimulatedOutcome::Succeed => Ok(()),
            SimulatedOutcome::Fail => Err(ConnectorError::SimulatedFailure(repository.clone())),
        }
    }
}
