use fv_core::ports::FileStoreError;
use fv_core::FileId;
use thiserror::Error;

/// Why a single file of a batch could not be stored.
#[derive(Debug, Error)]
pub enum UploadFailure {
    #[error("invalid file: {0}")]
    InvalidFile(String),

    #[error("failed to read payload: {0}")]
    PayloadRead(String),

    #[error("clock returned an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error(transparent)]
    Store(#[from] FileStoreError),
}

#[derive(Debug, Error)]
pub enum VaultError {
    /// Malformed or unknown login code. Deliberately carries no detail.
    #[error("invalid credential")]
    InvalidCredential,

    #[error("no active session")]
    NoActiveSession,

    #[error("file not found: {0}")]
    NotFound(String),

    /// Files before `index` were stored and stay stored; `uploaded` lists them.
    #[error(
        "upload aborted at file #{index} ({file_name}) after {} stored: {cause}",
        .uploaded.len()
    )]
    UploadAborted {
        index: usize,
        file_name: String,
        uploaded: Vec<FileId>,
        #[source]
        cause: UploadFailure,
    },

    #[error(transparent)]
    Store(#[from] FileStoreError),
}

impl VaultError {
    /// Store lookups that miss become `NotFound` with the name the caller used.
    pub(crate) fn from_lookup(err: FileStoreError, wanted: &str) -> Self {
        match err {
            FileStoreError::NotFound(_) => VaultError::NotFound(wanted.to_string()),
            other => VaultError::Store(other),
        }
    }
}
