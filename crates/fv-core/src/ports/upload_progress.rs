use async_trait::async_trait;

use crate::file::UploadProgress;

/// Observer for batch uploads. Called once per stored file, in order.
#[async_trait]
pub trait UploadProgressPort: Send + Sync {
    async fn emit_progress(&self, progress: UploadProgress);
}

pub struct NoopUploadProgress;

#[async_trait]
impl UploadProgressPort for NoopUploadProgress {
    async fn emit_progress(&self, _progress: UploadProgress) {}
}
