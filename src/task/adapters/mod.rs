//! Task record sources.

pub mod memory;

pub use memory::{DEFAULT_TASK_DELAY, sample_source, sample_tasks};
