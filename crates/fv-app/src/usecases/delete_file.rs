use std::sync::Arc;

use fv_core::ports::FileStorePort;
use fv_core::{FileId, FileRecord, PartitionKey};
use tracing::{info, warn};

use crate::error::VaultError;

/// How the caller picks the record to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    /// Newest record with this name.
    Name(String),
    Id(FileId),
}

/// Removes one record from a partition.
///
/// The record is looked up inside the partition first and deleted by id
/// afterwards, so a caller can never remove another partition's file.
pub struct DeleteFile {
    file_store: Arc<dyn FileStorePort>,
}

impl DeleteFile {
    pub fn from_ports(file_store: Arc<dyn FileStorePort>) -> Self {
        Self { file_store }
    }

    #[tracing::instrument(
        name = "usecase.delete_file.execute",
        skip(self),
        fields(partition = %partition_key)
    )]
    pub async fn execute(
        &self,
        partition_key: &PartitionKey,
        selector: &FileSelector,
    ) -> Result<(), VaultError> {
        let record = self.find(partition_key, selector).await?;

        if let Err(e) = self.file_store.delete_by_id(&record.id).await {
            if e.is_not_found() {
                warn!(file_id = %record.id, "File disappeared between lookup and delete");
            }
            return Err(VaultError::Store(e));
        }

        info!(file_id = %record.id, name = %record.name, "Deleted file");
        Ok(())
    }

    async fn find(
        &self,
        partition_key: &PartitionKey,
        selector: &FileSelector,
    ) -> Result<FileRecord, VaultError> {
        match selector {
            FileSelector::Name(name) => self
                .file_store
                .find_by_partition_and_name(partition_key, name)
                .await
                .map_err(|e| VaultError::from_lookup(e, name)),
            FileSelector::Id(id) => self
                .file_store
                .find_by_partition_and_id(partition_key, id)
                .await
                .map_err(|e| VaultError::from_lookup(e, id.as_str())),
        }
    }
}
