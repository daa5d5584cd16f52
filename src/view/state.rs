//! Load state of a record view.

use super::ports::SourceError;

/// Observable state of a record view.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    /// A fetch is in flight; consumers render a placeholder.
    Loading,
    /// The latest fetch completed with these records, in fetch order.
    Loaded(Vec<T>),
    /// The latest fetch failed.
    Failed(SourceError),
}

impl<T> LoadState<T> {
    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded records, if any.
    #[must_use]
    pub fn records(&self) -> Option<&[T]> {
        match self {
            Self::Loaded(records) => Some(records),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Returns the failure, if the latest fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&SourceError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Result of a single call to [`super::RecordView::load`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The fetch completed and replaced the record set.
    Loaded {
        /// Number of records now held by the view.
        count: usize,
    },
    /// The fetch failed and the view now reports the error.
    Failed(SourceError),
    /// A newer load started first; this fetch was cancelled or discarded
    /// and left the view untouched.
    Superseded,
}

impl LoadOutcome {
    /// Returns `true` when the fetch committed records.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}
