//! Transient user-facing notices.
//!
//! The repository selector reports every submission outcome as a
//! [`domain::Notification`] published through the
//! [`ports::NotificationSink`] port. Sinks decide how long notices live; the
//! in-memory centre in [`adapters`] keeps them until drained or dismissed.

pub mod adapters;
pub mod domain;
pub mod ports;
