use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use fv_core::ports::PayloadSourcePort;
use fv_core::UploadFile;
use tokio::fs;

/// Payload read lazily from a file on disk.
#[derive(Debug, Clone)]
pub struct FsPayloadSource {
    path: PathBuf,
}

impl FsPayloadSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build an upload for `path`, named after its final component and typed
    /// from its extension.
    ///
    /// Nothing is read here; a missing file only fails once the upload reaches it.
    pub fn upload_file(path: impl Into<PathBuf>) -> Result<UploadFile> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("path has no usable file name: {}", path.display()))?
            .to_string();
        let mime_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(UploadFile::new(name, mime_type, Arc::new(Self::new(path))))
    }
}

#[async_trait]
impl PayloadSourcePort for FsPayloadSource {
    async fn read_all(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read upload source: {}", self.path.display()))
    }
}
