//! Application services for repository selection.

mod selector;

pub use selector::{
    CONNECTED_NOTICE, CONNECTION_FAILED_NOTICE, EMPTY_INPUT_NOTICE, INVALID_FORMAT_NOTICE,
    NoticeTemplate, RepositorySelector, SelectionError, SelectionResult,
};
