//! Adapter implementations for record sources.

pub mod memory;

pub use memory::StaticSource;
