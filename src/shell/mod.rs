//! Application shell composing the selector and the dashboard.
//!
//! The shell owns the single piece of shared state, the selected
//! repository. Submitting a URL through the shell runs the repository
//! selector; an accepted reference replaces the selection, mounts the
//! dashboard on first use, and starts the contributor and task loads.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
