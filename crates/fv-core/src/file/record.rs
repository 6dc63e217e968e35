use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FileId, PartitionKey};

/// Content type recorded when the uploader did not supply one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// The persisted unit of the vault.
///
/// Records are write-once: every field is fixed at creation and there is no
/// update path, only delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub partition_key: PartitionKey,
    pub name: String,
    pub mime_type: String,
    /// Length of `payload` as captured at upload time.
    pub size_bytes: u64,
    pub payload: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Builds a new record for `payload`, capturing its length as `size_bytes`.
    pub fn new(
        id: FileId,
        partition_key: PartitionKey,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        payload: Vec<u8>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mime_type = mime_type.into();
        let mime_type = if mime_type.trim().is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type
        };

        Self {
            id,
            partition_key,
            name: name.into(),
            mime_type,
            size_bytes: payload.len() as u64,
            payload,
            created_at,
        }
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.size_bytes,
            created_at: self.created_at,
        }
    }
}

/// Payload-free view of a record handed to the presentation layer.
///
/// Sizes and timestamps are raw values; formatting them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: FileId,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub payload: Vec<u8>,
    pub mime_type: String,
    pub suggested_filename: String,
}

impl From<FileRecord> for DownloadedFile {
    fn from(record: FileRecord) -> Self {
        Self {
            payload: record.payload,
            mime_type: record.mime_type,
            suggested_filename: record.name,
        }
    }
}
