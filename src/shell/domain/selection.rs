//! Shared selected-repository state.

use crate::repository::domain::RepositoryReference;
use thiserror::Error;
use tokio::sync::watch;

/// Error returned by [`SelectedRepositoryView::changed`] once the owning
/// [`SelectedRepository`] is gone.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("the selected repository is no longer published")]
pub struct SelectionClosed;

/// Writer side of the selected repository.
///
/// Only the shell holds this; everything else reads through a
/// [`SelectedRepositoryView`]. Writes are last-write-wins.
#[derive(Debug)]
pub struct SelectedRepository {
    sender: watch::Sender<Option<RepositoryReference>>,
}

impl SelectedRepository {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replaces the selection and returns the previous one.
    pub fn set(&self, repository: RepositoryReference) -> Option<RepositoryReference> {
        self.sender.send_replace(Some(repository))
    }

    /// Empties the selection and returns the previous one.
    pub fn clear(&self) -> Option<RepositoryReference> {
        self.sender.send_replace(None)
    }

    /// Returns the current selection.
    #[must_use]
    pub fn get(&self) -> Option<RepositoryReference> {
        self.sender.borrow().clone()
    }

    /// Returns `true` when a repository is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Returns a read-only view of the selection.
    #[must_use]
    pub fn view(&self) -> SelectedRepositoryView {
        SelectedRepositoryView {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for SelectedRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the selected repository.
#[derive(Debug, Clone)]
pub struct SelectedRepositoryView {
    receiver: watch::Receiver<Option<RepositoryReference>>,
}

impl SelectedRepositoryView {
    /// Returns the current selection.
    #[must_use]
    pub fn current(&self) -> Option<RepositoryReference> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next change and returns the new selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionClosed`] when the writer has been dropped.
    pub async fn changed(&mut self) -> Result<Option<RepositoryReference>, SelectionClosed> {
        self.receiver.changed().await.map_err(|_| SelectionClosed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }
}
