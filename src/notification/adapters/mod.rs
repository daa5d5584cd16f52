//! Adapter implementations for notification sinks.

pub mod memory;

pub use memory::InMemoryNotificationCenter;
