use std::sync::Arc;

use fv_core::ports::FileStorePort;
use fv_core::{FileRecord, PartitionKey};
use tracing::debug;

use crate::error::VaultError;

/// Lists a partition, oldest first. Records sharing a timestamp are ordered
/// by name so the result is stable across calls.
pub struct ListFiles {
    file_store: Arc<dyn FileStorePort>,
}

impl ListFiles {
    pub fn from_ports(file_store: Arc<dyn FileStorePort>) -> Self {
        Self { file_store }
    }

    #[tracing::instrument(
        name = "usecase.list_files.execute",
        skip(self),
        fields(partition = %partition_key)
    )]
    pub async fn execute(
        &self,
        partition_key: &PartitionKey,
    ) -> Result<Vec<FileRecord>, VaultError> {
        let mut records = self.file_store.list_by_partition(partition_key).await?;

        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(count = records.len(), "Listed files");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryFileStore;
    use chrono::{TimeZone, Utc};
    use fv_core::ports::FileStoreError;
    use fv_core::FileId;

    fn record(partition: &str, name: &str, created_ms: i64) -> FileRecord {
        FileRecord::new(
            FileId::new(),
            PartitionKey::new(partition).unwrap(),
            name,
            "text/plain",
            name.as_bytes().to_vec(),
            Utc.timestamp_millis_opt(created_ms).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_sorted_by_creation_then_name() {
        let store = Arc::new(InMemoryFileStore::default());
        store.insert(record("1234", "c.txt", 1_000));
        store.insert(record("1234", "b.txt", 3_000));
        store.insert(record("1234", "a.txt", 3_000));
        store.insert(record("5678", "other.txt", 2_000));

        let listed = ListFiles::from_ports(store)
            .execute(&PartitionKey::new("1234").unwrap())
            .await
            .unwrap();

        let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["c.txt", "a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_empty_partition_lists_nothing() {
        let store = Arc::new(InMemoryFileStore::default());
        store.insert(record("5678", "other.txt", 2_000));

        let listed = ListFiles::from_ports(store)
            .execute(&PartitionKey::new("1234").unwrap())
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = Arc::new(InMemoryFileStore::default());
        store.set_unavailable();

        let err = ListFiles::from_ports(store)
            .execute(&PartitionKey::new("1234").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            VaultError::Store(FileStoreError::StorageUnavailable(_))
        ));
    }
}
