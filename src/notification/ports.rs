//! Sink port receiving published notifications.

use super::domain::Notification;

/// Destination for notifications.
pub trait NotificationSink: Send + Sync {
    /// Publishes a notification.
    fn publish(&self, notification: Notification);
}
