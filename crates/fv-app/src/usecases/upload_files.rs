use std::sync::Arc;

use chrono::DateTime;
use fv_core::ports::{ClockPort, FileStorePort, UploadProgressPort};
use fv_core::{FileId, FileRecord, PartitionKey, UploadFile, UploadProgress, UploadReport};
use tracing::{debug, info, warn};

use crate::error::{UploadFailure, VaultError};

/// Stores a batch of files into one partition, strictly one after another.
///
/// File *i + 1* is not read until file *i* has been written. The first failure
/// stops the batch; earlier files stay stored (there is no rollback).
pub struct UploadFiles {
    file_store: Arc<dyn FileStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl UploadFiles {
    pub fn from_ports(file_store: Arc<dyn FileStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { file_store, clock }
    }

    #[tracing::instrument(
        name = "usecase.upload_files.execute",
        skip(self, files, progress),
        fields(partition = %partition_key, total = files.len())
    )]
    pub async fn execute(
        &self,
        partition_key: &PartitionKey,
        files: Vec<UploadFile>,
        progress: &dyn UploadProgressPort,
    ) -> Result<UploadReport, VaultError> {
        let total = files.len();
        let mut report = UploadReport::default();

        for (index, file) in files.into_iter().enumerate() {
            let record = match self.store_one(partition_key, &file).await {
                Ok(record) => record,
                Err(cause) => {
                    warn!(index, file_name = %file.name, error = %cause, "Upload aborted");
                    return Err(VaultError::UploadAborted {
                        index,
                        file_name: file.name,
                        uploaded: report.uploaded.into_iter().map(|s| s.id).collect(),
                        cause,
                    });
                }
            };

            debug!(index, file_id = %record.id, size_bytes = record.size_bytes, "Stored file");
            report.uploaded.push(record.summary());

            progress
                .emit_progress(UploadProgress {
                    completed: index + 1,
                    total,
                    current_file: record.name,
                })
                .await;
        }

        info!(uploaded = report.uploaded.len(), "Upload batch completed");
        Ok(report)
    }

    async fn store_one(
        &self,
        partition_key: &PartitionKey,
        file: &UploadFile,
    ) -> Result<FileRecord, UploadFailure> {
        if file.name.trim().is_empty() {
            return Err(UploadFailure::InvalidFile("file name is empty".to_string()));
        }

        let payload = file
            .source
            .read_all()
            .await
            .map_err(|e| UploadFailure::PayloadRead(format!("{:#}", e)))?;

        let now_ms = self.clock.now_ms();
        let created_at =
            DateTime::from_timestamp_millis(now_ms).ok_or(UploadFailure::InvalidTimestamp(now_ms))?;

        let record = FileRecord::new(
            FileId::new(),
            partition_key.clone(),
            file.name.clone(),
            file.mime_type.clone(),
            payload,
            created_at,
        );

        self.file_store.create(&record).await?;
        Ok(record)
    }
}
