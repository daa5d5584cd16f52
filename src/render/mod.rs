//! Text rendering of the application state.
//!
//! [`services::DashboardRenderer`] turns a [`crate::shell::domain::ShellSnapshot`]
//! into text using `minijinja` templates. Badge colours are resolved by the
//! pure mappings in [`domain`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
