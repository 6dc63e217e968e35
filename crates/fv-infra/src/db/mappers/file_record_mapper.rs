use crate::db::models::{FileRecordRow, NewFileRecordRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use fv_core::{FileId, FileRecord, PartitionKey};

pub struct FileRecordRowMapper;

impl InsertMapper<FileRecord, NewFileRecordRow> for FileRecordRowMapper {
    fn to_row(&self, domain: &FileRecord) -> Result<NewFileRecordRow> {
        let size_bytes = i64::try_from(domain.size_bytes)
            .map_err(|_| anyhow!("size_bytes out of range: {}", domain.size_bytes))?;

        Ok(NewFileRecordRow {
            id: domain.id.as_str().to_string(),
            partition_key: domain.partition_key.as_str().to_string(),
            name: domain.name.clone(),
            mime_type: domain.mime_type.clone(),
            size_bytes,
            payload: domain.payload.clone(),
            created_at_ms: domain.created_at.timestamp_millis(),
        })
    }
}

impl RowMapper<FileRecordRow, FileRecord> for FileRecordRowMapper {
    fn to_domain(&self, row: &FileRecordRow) -> Result<FileRecord> {
        let partition_key = PartitionKey::new(row.partition_key.clone())
            .map_err(|e| anyhow!("file_record {}: {}", row.id, e))?;
        let size_bytes = u64::try_from(row.size_bytes).map_err(|_| {
            anyhow!("file_record {}: negative size_bytes {}", row.id, row.size_bytes)
        })?;
        let created_at = Utc
            .timestamp_millis_opt(row.created_at_ms)
            .single()
            .ok_or_else(|| anyhow!("invalid created_at_ms timestamp: {}", row.created_at_ms))?;

        // Built field by field: size_bytes is the stored value, never recomputed.
        Ok(FileRecord {
            id: FileId::from(row.id.as_str()),
            partition_key,
            name: row.name.clone(),
            mime_type: row.mime_type.clone(),
            size_bytes,
            payload: row.payload.clone(),
            created_at,
        })
    }
}
