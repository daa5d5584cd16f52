//! Domain model for repository references.

mod error;
mod reference;

pub use error::RepositoryReferenceError;
pub use reference::RepositoryReference;
