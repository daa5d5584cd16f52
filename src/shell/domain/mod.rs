//! Shell state: selection, theme, and render snapshots.

mod selection;
mod snapshot;
mod theme;

pub use selection::{SelectedRepository, SelectedRepositoryView, SelectionClosed};
pub use snapshot::{DashboardSnapshot, ShellSnapshot};
pub use theme::{ParseThemeError, Theme};
