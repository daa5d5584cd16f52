//! Busy-guarded repository submission.

use crate::{
    notification::{
        domain::{Notification, NotificationVariant},
        ports::NotificationSink,
    },
    repository::{
        domain::{RepositoryReference, RepositoryReferenceError},
        ports::{ConnectorError, RepositoryConnector},
    },
};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fixed title, description, and variant of a selector notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTemplate {
    /// Notification title.
    pub title: &'static str,
    /// Notification description.
    pub description: &'static str,
    /// Notification variant.
    pub variant: NotificationVariant,
}

impl NoticeTemplate {
    /// Creates a notification from the template.
    #[must_use]
    pub fn instantiate(&self, clock: &impl Clock) -> Notification {
        Notification::new(self.title, self.description, self.variant, clock)
    }
}

/// Published when the submitted input is blank.
pub const EMPTY_INPUT_NOTICE: NoticeTemplate = NoticeTemplate {
    title: "Repository URL Required",
    description: "Please enter a GitHub repository URL",
    variant: NotificationVariant::Destructive,
};

/// Published when the submitted input is not a GitHub repository URL.
pub const INVALID_FORMAT_NOTICE: NoticeTemplate = NoticeTemplate {
    title: "Invalid URL",
    description: "Please enter a valid GitHub repository URL",
    variant: NotificationVariant::Destructive,
};

/// Published when the remote round-trip fails.
pub const CONNECTION_FAILED_NOTICE: NoticeTemplate = NoticeTemplate {
    title: "Connection Failed",
    description: "Unable to fetch repository data. Please try again.",
    variant: NotificationVariant::Destructive,
};

/// Published when a repository has been selected.
pub const CONNECTED_NOTICE: NoticeTemplate = NoticeTemplate {
    title: "Repository Connected!",
    description: "Successfully fetched repository data and contributors",
    variant: NotificationVariant::Default,
};

/// Service-level errors for repository submission.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The input failed validation.
    #[error(transparent)]
    Reference(#[from] RepositoryReferenceError),

    /// Another submission is still in flight.
    #[error("a repository submission is already in flight")]
    Busy,

    /// The remote round-trip failed.
    #[error("failed to connect to {repository}: {source}")]
    ConnectionFailed {
        /// Repository that was being connected.
        repository: RepositoryReference,
        /// Underlying connector failure.
        #[source]
        source: ConnectorError,
    },
}

/// Result type for repository submission.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Validates submitted URLs and hands accepted references to the caller.
///
/// At most one submission is in flight at a time. A submission arriving
/// while another is pending is rejected with [`SelectionError::Busy`] and
/// leaves no trace: no notification is published and no callback runs.
pub struct RepositorySelector<C, K>
where
    C: RepositoryConnector,
    K: Clock + Send + Sync,
{
    connector: Arc<C>,
    notifications: Arc<dyn NotificationSink>,
    clock: Arc<K>,
    busy: AtomicBool,
}

impl<C, K> RepositorySelector<C, K>
where
    C: RepositoryConnector,
    K: Clock + Send + Sync,
{
    /// Creates a new selector.
    #[must_use]
    pub fn new(connector: Arc<C>, notifications: Arc<dyn NotificationSink>, clock: Arc<K>) -> Self {
        Self {
            connector,
            notifications,
            clock,
            busy: AtomicBool::new(false),
        }
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Submits raw user input.
    ///
    /// On success `on_select` receives the validated reference before the
    /// success notification is published, and the reference is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Busy`] when another submission is in
    /// flight, [`SelectionError::Reference`] when validation fails, or
    /// [`SelectionError::ConnectionFailed`] when the connector fails.
    pub async fn submit<F>(
        &self,
        raw_input: &str,
        on_select: F,
    ) -> SelectionResult<RepositoryReference>
    where
        F: FnOnce(&RepositoryReference) + Send,
    {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!("ignoring repository submission while another is in flight");
            return Err(SelectionError::Busy);
        };

        let reference = match RepositoryReference::parse(raw_input) {
            Ok(reference) => reference,
            Err(err) => {
                warn!(error = %err, "rejected repository submission");
                self.notify(match err {
                    RepositoryReferenceError::EmptyInput => &EMPTY_INPUT_NOTICE,
                    RepositoryReferenceError::InvalidFormat(_) => &INVALID_FORMAT_NOTICE,
                });
                return Err(err.into());
            }
        };

        info!(repository = %reference, "connecting to repository");
        if let Err(source) = self.connector.connect(&reference).await {
            warn!(repository = %reference, error = %source, "repository connection failed");
            self.notify(&CONNECTION_FAILED_NOTICE);
            return Err(SelectionError::ConnectionFailed {
                repository: reference,
                source,
            });
        }

        on_select(&reference);
        self.notify(&CONNECTED_NOTICE);
        info!(repository = %reference, "repository connected");
        Ok(reference)
    }

    fn notify(&self, template: &NoticeTemplate) {
        self.notifications.publish(template.instantiate(&*self.clock));
    }
}

/// Holds the busy flag for the lifetime of one submission.
///
/// Dropping the guard clears the flag, including when the submission future
/// is dropped mid-flight.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
