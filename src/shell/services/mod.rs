//! Shell services.

mod dashboard;
mod shell_service;

pub use dashboard::{Dashboard, DashboardLoads, DashboardOutcome};
pub use shell_service::{Shell, ShellError, ShellResult, Submission};
