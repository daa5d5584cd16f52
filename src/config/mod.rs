//! Runtime configuration.
//!
//! Values come from `OSM_*` environment variables on top of built-in
//! defaults; command-line flags override them afterwards.

use crate::{
    contributor::adapters::DEFAULT_CONTRIBUTOR_DELAY,
    repository::adapters::{DEFAULT_CONNECT_DELAY, SimulatedOutcome},
    shell::domain::Theme,
    task::adapters::DEFAULT_TASK_DELAY,
};
use camino::Utf8PathBuf;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Selector round-trip delay in milliseconds.
pub const SELECTOR_DELAY_VAR: &str = "OSM_SELECTOR_DELAY_MS";
/// Contributor fetch delay in milliseconds.
pub const CONTRIBUTOR_DELAY_VAR: &str = "OSM_CONTRIBUTOR_DELAY_MS";
/// Task fetch delay in milliseconds.
pub const TASK_DELAY_VAR: &str = "OSM_TASK_DELAY_MS";
/// Makes every selector round-trip fail when truthy.
pub const SIMULATE_FAILURE_VAR: &str = "OSM_SIMULATE_FAILURE";
/// Initial theme, `light` or `dark`.
pub const THEME_VAR: &str = "OSM_THEME";
/// Path of a JSON fixture file replacing the sample records.
pub const FIXTURES_VAR: &str = "OSM_FIXTURES";
/// Log filter used when `RUST_LOG` is unset.
pub const LOG_VAR: &str = "OSM_LOG";

/// Log filter used when neither `RUST_LOG` nor `OSM_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "oss_manager=info";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value that cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated latency of the selector round-trip.
    pub selector_delay: Duration,
    /// Simulated latency of the contributor fetch.
    pub contributor_delay: Duration,
    /// Simulated latency of the task fetch.
    pub task_delay: Duration,
    /// Whether selector round-trips fail.
    pub simulate_failure: bool,
    /// Initial theme.
    pub theme: Theme,
    /// Fixture file replacing the built-in samples.
    pub fixtures: Option<Utf8PathBuf>,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selector_delay: DEFAULT_CONNECT_DELAY,
            contributor_delay: DEFAULT_CONTRIBUTOR_DELAY,
            task_delay: DEFAULT_TASK_DELAY,
            simulate_failure: false,
            theme: Theme::default(),
            fixtures: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Returns the defaults with every simulated delay set to zero.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            selector_delay: Duration::ZERO,
            contributor_delay: Duration::ZERO,
            task_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Loads configuration from `lookup`, falling back to defaults for
    /// missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value is malformed.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            selector_delay: delay(lookup, SELECTOR_DELAY_VAR)?.unwrap_or(defaults.selector_delay),
            contributor_delay: delay(lookup, CONTRIBUTOR_DELAY_VAR)?
                .unwrap_or(defaults.contributor_delay),
            task_delay: delay(lookup, TASK_DELAY_VAR)?.unwrap_or(defaults.task_delay),
            simulate_failure: flag(lookup, SIMULATE_FAILURE_VAR)?
                .unwrap_or(defaults.simulate_failure),
            theme: lookup(THEME_VAR)
                .map(|value| {
                    Theme::try_from(value.as_str()).map_err(|_| ConfigError::InvalidValue {
                        key: THEME_VAR,
                        value,
                    })
                })
                .transpose()?
                .unwrap_or(defaults.theme),
            fixtures: lookup(FIXTURES_VAR)
                .filter(|value| !value.trim().is_empty())
                .map(Utf8PathBuf::from)
                .or(defaults.fixtures),
            log_filter: lookup(LOG_VAR)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        })
    }

    /// Returns the outcome the simulated connector should produce.
    #[must_use]
    pub const fn connect_outcome(&self) -> SimulatedOutcome {
        if self.simulate_failure {
            SimulatedOutcome::Fail
        } else {
            SimulatedOutcome::Succeed
        }
    }
}

fn delay(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    lookup(key)
        .map(|value| match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidValue { key, value }),
        })
        .transpose()
}
