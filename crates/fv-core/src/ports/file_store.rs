use async_trait::async_trait;
use std::sync::Arc;

use super::errors::FileStoreError;
use crate::file::FileRecord;
use crate::ids::{FileId, PartitionKey};

/// The partitioned blob store.
///
/// Knows partition keys and records, never users. No operation retries on
/// its own.
#[async_trait]
pub trait FileStorePort: Send + Sync {
    /// Persist a new record. Fails with [`FileStoreError::DuplicateId`] when
    /// the id is already taken.
    async fn create(&self, record: &FileRecord) -> Result<(), FileStoreError>;

    /// Every record of the partition, in no particular order. Empty when
    /// nothing matches.
    async fn list_by_partition(
        &self,
        partition_key: &PartitionKey,
    ) -> Result<Vec<FileRecord>, FileStoreError>;

    /// The most recently created record with `name` in the partition.
    async fn find_by_partition_and_name(
        &self,
        partition_key: &PartitionKey,
        name: &str,
    ) -> Result<FileRecord, FileStoreError>;

    /// Exact lookup. A record living in another partition is reported as
    /// not found.
    async fn find_by_partition_and_id(
        &self,
        partition_key: &PartitionKey,
        id: &FileId,
    ) -> Result<FileRecord, FileStoreError>;

    async fn delete_by_id(&self, id: &FileId) -> Result<(), FileStoreError>;
}

#[async_trait]
impl<T: FileStorePort + ?Sized> FileStorePort for Arc<T> {
    async fn create(&self, record: &FileRecord) -> Result<(), FileStoreError> {
        (**self).create(record).await
    }

    async fn list_by_partition(
        &self,
        partition_key: &PartitionKey,
    ) -> Result<Vec<FileRecord>, FileStoreError> {
        (**self).list_by_partition(partition_key).await
    }

    async fn find_by_partition_and_name(
        &self,
        partition_key: &PartitionKey,
        name: &str,
    ) -> Result<FileRecord, FileStoreError> {
        (**self).find_by_partition_and_name(partition_key, name).await
    }

    async fn find_by_partition_and_id(
        &self,
        partition_key: &PartitionKey,
        id: &FileId,
    ) -> Result<FileRecord, FileStoreError> {
        (**self).find_by_partition_and_id(partition_key, id).await
    }

    async fn delete_by_id(&self, id: &FileId) -> Result<(), FileStoreError> {
        (**self).delete_by_id(id).await
    }
}
