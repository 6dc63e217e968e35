use std::sync::Arc;

use fv_core::ports::FileStorePort;
use fv_core::{DownloadedFile, FileId, PartitionKey};
use tracing::info;

use crate::error::VaultError;

pub struct DownloadFile {
    file_store: Arc<dyn FileStorePort>,
}

impl DownloadFile {
    pub fn from_ports(file_store: Arc<dyn FileStorePort>) -> Self {
        Self { file_store }
    }

    /// Fetches the newest record named `name` in the partition.
    #[tracing::instrument(
        name = "usecase.download_file.execute",
        skip(self),
        fields(partition = %partition_key)
    )]
    pub async fn execute(
        &self,
        partition_key: &PartitionKey,
        name: &str,
    ) -> Result<DownloadedFile, VaultError> {
        let record = self
            .file_store
            .find_by_partition_and_name(partition_key, name)
            .await
            .map_err(|e| VaultError::from_lookup(e, name))?;

        info!(file_id = %record.id, size_bytes = record.size_bytes, "Downloaded file");
        Ok(DownloadedFile::from(record))
    }

    #[tracing::instrument(
        name = "usecase.download_file.execute_by_id",
        skip(self),
        fields(partition = %partition_key)
    )]
    pub async fn execute_by_id(
        &self,
        partition_key: &PartitionKey,
        id: &FileId,
    ) -> Result<DownloadedFile, VaultError> {
        let record = self
            .file_store
            .find_by_partition_and_id(partition_key, id)
            .await
            .map_err(|e| VaultError::from_lookup(e, id.as_str()))?;

        info!(file_id = %record.id, size_bytes = record.size_bytes, "Downloaded file");
        Ok(DownloadedFile::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryFileStore;
    use chrono::{TimeZone, Utc};
    use fv_core::FileRecord;

    fn partition() -> PartitionKey {
        PartitionKey::new("1234").unwrap()
    }

    fn record(partition: &str, name: &str, payload: &[u8], created_ms: i64) -> FileRecord {
        FileRecord::new(
            FileId::new(),
            PartitionKey::new(partition).unwrap(),
            name,
            "text/plain",
            payload.to_vec(),
            Utc.timestamp_millis_opt(created_ms).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_download_returns_exact_bytes_and_metadata() {
        let store = Arc::new(InMemoryFileStore::default());
        store.insert(record("1234", "a.txt", &[0x61, 0x62, 0x63], 1_000));

        let file = DownloadFile::from_ports(store)
            .execute(&partition(), "a.txt")
            .await
            .unwrap();

        assert_eq!(file.payload, vec![0x61, 0x62, 0x63]);
        assert_eq!(file.mime_type, "text/plain");
        assert_eq!(file.suggested_filename, "a.txt");
    }

    #[tokio::test]
    async fn test_newest_duplicate_name_wins() {
        let store = Arc::new(InMemoryFileStore::default());
        store.insert(record("1234", "a.txt", b"old", 1_000));
        store.insert(record("1234", "a.txt", b"new", 2_000));

        let file = DownloadFile::from_ports(store)
            .execute(&partition(), "a.txt")
            .await
            .unwrap();

        assert_eq!(file.payload, b"new".to_vec());
    }

    #[tokio::test]
    async fn test_other_partition_is_not_found() {
        let store = Arc::new(InMemoryFileStore::default());
        let foreign = record("5678", "a.txt", b"secret", 1_000);
        let foreign_id = foreign.id.clone();
        store.insert(foreign);

        let uc = DownloadFile::from_ports(store);

        match uc.execute(&partition(), "a.txt").await {
            Err(VaultError::NotFound(name)) => assert_eq!(name, "a.txt"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            uc.execute_by_id(&partition(), &foreign_id).await,
            Err(VaultError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_download_by_id_picks_exact_record() {
        let store = Arc::new(InMemoryFileStore::default());
        let older = record("1234", "a.txt", b"old", 1_000);
        let older_id = older.id.clone();
        store.insert(older);
        store.insert(record("1234", "a.txt", b"new", 2_000));

        let file = DownloadFile::from_ports(store)
            .execute_by_id(&partition(), &older_id)
            .await
            .unwrap();

        assert_eq!(file.payload, b"old".to_vec());
    }
}
