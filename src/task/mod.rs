//! Scrum-style task board.
//!
//! Tasks are loaded for the selected repository through a record source and
//! partitioned into four fixed lifecycle columns. The partition is a pure
//! function of the loaded list and is recomputed on every read.
//!
//! - Domain types and the column partition in [`domain`]
//! - Sample data in [`adapters`]
//! - The board view in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
