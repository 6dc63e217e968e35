use async_trait::async_trait;
use fv_core::ports::UploadProgressPort;
use fv_core::UploadProgress;
use tokio::sync::mpsc;
use tracing::debug;

/// Forwards upload progress to a channel, typically drained by a UI task.
///
/// A dropped receiver does not fail the upload.
#[derive(Clone)]
pub struct ChannelUploadProgress {
    tx: mpsc::UnboundedSender<UploadProgress>,
}

impl ChannelUploadProgress {
    pub fn new(tx: mpsc::UnboundedSender<UploadProgress>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UploadProgress>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl UploadProgressPort for ChannelUploadProgress {
    async fn emit_progress(&self, progress: UploadProgress) {
        if let Err(e) = self.tx.send(progress) {
            debug!(completed = e.0.completed, "Progress receiver dropped");
        }
    }
}
