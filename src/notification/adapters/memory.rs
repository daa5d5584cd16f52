//! In-memory notification centre.

use std::sync::{Arc, PoisonError, RwLock};

use crate::notification::{
    domain::{Notification, NotificationId},
    ports::NotificationSink,
};

/// Thread-safe in-memory notification centre.
///
/// Cloned handles share the same queue, so the selector can publish through
/// one handle while the front end drains another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationCenter {
    queue: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationCenter {
    /// Creates an empty notification centre.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending notifications in publication order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.queue
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all pending notifications.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.queue.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    /// Dismisses a single notification.
    ///
    /// Returns `true` when the notification was pending.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut queue = self.queue.write().unwrap_or_else(PoisonError::into_inner);
        let before = queue.len();
        queue.retain(|notification| notification.id() != id);
        queue.len() != before
    }

    /// Returns the most recently published notification.
    #[must_use]
    pub fn latest(&self) -> Option<Notification> {
        self.queue
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for InMemoryNotificationCenter {
    fn publish(&self, notification: Notification) {
        self.queue
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
