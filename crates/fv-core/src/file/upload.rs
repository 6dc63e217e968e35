use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::FileSummary;
use crate::ports::{InMemoryPayload, PayloadSourcePort};

/// A file queued for upload. The bytes are pulled from `source` only when the
/// upload reaches this file.
#[derive(Clone)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub source: Arc<dyn PayloadSourcePort>,
}

impl UploadFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        source: Arc<dyn PayloadSourcePort>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source,
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self::new(name, mime_type, Arc::new(InMemoryPayload::new(bytes)))
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}

/// Emitted after each file of a batch has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadProgress {
    pub completed: usize,
    pub total: usize,
    pub current_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    pub uploaded: Vec<FileSummary>,
}
