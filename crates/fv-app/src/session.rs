//! Vault session controller.
//!
//! Holds the one piece of mutable state in the application: who is logged
//! in. Every file operation reads the active partition from that state and
//! hands it to a use case; use cases never see the session itself.

use fv_core::ports::UploadProgressPort;
use fv_core::{
    DownloadedFile, FileId, FileRecord, Identity, PartitionKey, SessionState, UploadFile,
    UploadReport,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::deps::VaultDeps;
use crate::error::VaultError;
use crate::usecases::{
    DeleteFile, DownloadFile, FileSelector, ListFiles, ResolveIdentity, UploadFiles,
};

pub struct VaultSession {
    deps: VaultDeps,
    state: RwLock<SessionState>,
}

impl VaultSession {
    pub fn new(deps: VaultDeps) -> Self {
        Self {
            deps,
            state: RwLock::new(SessionState::LoggedOut),
        }
    }

    /// On failure the previous session, if any, is left untouched.
    pub async fn login(&self, code: &str) -> Result<Identity, VaultError> {
        let identity =
            ResolveIdentity::from_ports(self.deps.identity_resolver.clone()).execute(code)?;

        *self.state.write().await = SessionState::LoggedIn(identity.clone());
        info!(user = %identity.display_name, "Session started");
        Ok(identity)
    }

    pub async fn logout(&self) {
        let previous = std::mem::take(&mut *self.state.write().await);
        if let SessionState::LoggedIn(identity) = previous {
            info!(user = %identity.display_name, "Session ended");
        }
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.state.read().await.identity().cloned()
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn upload_all(
        &self,
        files: Vec<UploadFile>,
        progress: &dyn UploadProgressPort,
    ) -> Result<UploadReport, VaultError> {
        let partition = self.active_partition().await?;
        UploadFiles::from_ports(self.deps.file_store.clone(), self.deps.clock.clone())
            .execute(&partition, files, progress)
            .await
    }

    /// Records of the active partition, oldest first. Call
    /// [`FileRecord::summary`] to hand them to a presentation layer.
    pub async fn list_files(&self) -> Result<Vec<FileRecord>, VaultError> {
        let partition = self.active_partition().await?;
        ListFiles::from_ports(self.deps.file_store.clone())
            .execute(&partition)
            .await
    }

    pub async fn download_file(&self, name: &str) -> Result<DownloadedFile, VaultError> {
        let partition = self.active_partition().await?;
        DownloadFile::from_ports(self.deps.file_store.clone())
            .execute(&partition, name)
            .await
    }

    pub async fn download_file_by_id(&self, id: &FileId) -> Result<DownloadedFile, VaultError> {
        let partition = self.active_partition().await?;
        DownloadFile::from_ports(self.deps.file_store.clone())
            .execute_by_id(&partition, id)
            .await
    }

    pub async fn delete_file(&self, name: &str) -> Result<(), VaultError> {
        let partition = self.active_partition().await?;
        DeleteFile::from_ports(self.deps.file_store.clone())
            .execute(&partition, &FileSelector::Name(name.to_string()))
            .await
    }

    pub async fn delete_file_by_id(&self, id: &FileId) -> Result<(), VaultError> {
        let partition = self.active_partition().await?;
        DeleteFile::from_ports(self.deps.file_store.clone())
            .execute(&partition, &FileSelector::Id(id.clone()))
            .await
    }

    // The read guard is released before the caller touches the store.
    async fn active_partition(&self) -> Result<PartitionKey, VaultError> {
        self.state
            .read()
            .await
            .partition_key()
            .cloned()
            .ok_or(VaultError::NoActiveSession)
    }
}
