use thiserror::Error;

use crate::ids::FileId;

#[derive(Debug, Error)]
pub enum FileStoreError {
    /// The database could not be opened, migrated, or a connection could not
    /// be obtained.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage write failed: {0}")]
    StorageWriteFailed(String),

    #[error("duplicate file id: {0}")]
    DuplicateId(FileId),

    #[error("not found: {0}")]
    NotFound(String),

    /// Any other read-side failure, including rows that cannot be mapped back
    /// to a record.
    #[error("storage error: {0}")]
    Storage(String),
}

impl FileStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileStoreError::NotFound(_))
    }
}
