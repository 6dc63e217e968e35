use std::path::Path;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use fv_core::ports::{FileStoreError, FileStorePort};
use fv_core::{FileId, FileRecord, PartitionKey};

use crate::db::error::DbError;
use crate::db::executor::DieselSqliteExecutor;
use crate::db::mappers::FileRecordRowMapper;
use crate::db::models::{FileRecordRow, NewFileRecordRow};
use crate::db::pool::init_db_pool;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::file_record::dsl::*;

/// SQLite-backed partitioned blob store.
pub struct DieselFileStore<E = DieselSqliteExecutor, M = FileRecordRowMapper> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselFileStore<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

impl DieselFileStore {
    /// Open the database at `database_path`, creating it and its indexes if
    /// needed, and return a store owning the connection pool.
    ///
    /// Safe to call repeatedly for the same path.
    pub fn initialize(database_path: &Path, max_connections: u32) -> Result<Self, FileStoreError> {
        let pool = init_db_pool(database_path, max_connections)?;
        Ok(Self::new(
            DieselSqliteExecutor::new(pool),
            FileRecordRowMapper,
        ))
    }
}

impl<E, M> DieselFileStore<E, M>
where
    M: RowMapper<FileRecordRow, FileRecord>,
{
    fn map_rows(&self, rows: Vec<FileRecordRow>) -> Result<Vec<FileRecord>, DbError> {
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record = self.mapper.to_domain(&row).map_err(|e| {
                anyhow::anyhow!("Failed to map file_record id {}: {}", row.id, e)
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[async_trait]
impl<E, M> FileStorePort for DieselFileStore<E, M>
where
    E: DbExecutor,
    M: InsertMapper<FileRecord, NewFileRecordRow> + RowMapper<FileRecordRow, FileRecord>,
{
    async fn create(&self, record: &FileRecord) -> Result<(), FileStoreError> {
        let row = self
            .mapper
            .to_row(record)
            .map_err(|e| FileStoreError::StorageWriteFailed(e.to_string()))?;

        self.executor
            .run(move |conn| {
                diesel::insert_into(file_record)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(|e| match e {
                DbError::Query(DieselError::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => FileStoreError::DuplicateId(record.id.clone()),
                other => map_write_error(other),
            })?;

        debug!(
            file_id = %record.id,
            partition = %record.partition_key,
            size_bytes = record.size_bytes,
            "Inserted file record"
        );
        Ok(())
    }

    async fn list_by_partition(
        &self,
        partition_key_value: &PartitionKey,
    ) -> Result<Vec<FileRecord>, FileStoreError> {
        let partition = partition_key_value.as_str().to_string();
        self.executor
            .run(move |conn| {
                let rows = file_record
                    .filter(partition_key.eq(&partition))
                    .order((created_at_ms.asc(), seq.asc()))
                    .select(FileRecordRow::as_select())
                    .load::<FileRecordRow>(conn)?;
                self.map_rows(rows)
            })
            .map_err(map_read_error)
    }

    async fn find_by_partition_and_name(
        &self,
        partition_key_value: &PartitionKey,
        name_value: &str,
    ) -> Result<FileRecord, FileStoreError> {
        let partition = partition_key_value.as_str().to_string();
        let wanted = name_value.to_string();
        let row = self
            .executor
            .run(move |conn| {
                // Several records may share a name; the newest one wins, and
                // within one millisecond the later insert wins.
                let row = file_record
                    .filter(partition_key.eq(&partition))
                    .filter(name.eq(&wanted))
                    .order((created_at_ms.desc(), seq.desc()))
                    .select(FileRecordRow::as_select())
                    .first::<FileRecordRow>(conn)
                    .optional()?;
                Ok(row)
            })
            .map_err(map_read_error)?;

        match row {
            Some(r) => self
                .mapper
                .to_domain(&r)
                .map_err(|e| FileStoreError::Storage(e.to_string())),
            None => Err(FileStoreError::NotFound(format!(
                "no file named {:?} in partition {}",
                name_value, partition_key_value
            ))),
        }
    }

    async fn find_by_partition_and_id(
        &self,
        partition_key_value: &PartitionKey,
        file_id: &FileId,
    ) -> Result<FileRecord, FileStoreError> {
        let partition = partition_key_value.as_str().to_string();
        let wanted = file_id.as_str().to_string();
        let row = self
            .executor
            .run(move |conn| {
                let row = file_record
                    .filter(id.eq(&wanted))
                    .filter(partition_key.eq(&partition))
                    .select(FileRecordRow::as_select())
                    .first::<FileRecordRow>(conn)
                    .optional()?;
                Ok(row)
            })
            .map_err(map_read_error)?;

        match row {
            Some(r) => self
                .mapper
                .to_domain(&r)
                .map_err(|e| FileStoreError::Storage(e.to_string())),
            None => Err(FileStoreError::NotFound(format!(
                "no file with id {} in partition {}",
                file_id, partition_key_value
            ))),
        }
    }

    async fn delete_by_id(&self, file_id: &FileId) -> Result<(), FileStoreError> {
        let wanted = file_id.as_str().to_string();
        let affected = self
            .executor
            .run(move |conn| {
                let affected = diesel::delete(file_record.filter(id.eq(&wanted))).execute(conn)?;
                Ok(affected)
            })
            .map_err(map_write_error)?;

        if affected == 0 {
            return Err(FileStoreError::NotFound(format!("no file with id {}", file_id)));
        }

        debug!(file_id = %file_id, "Deleted file record");
        Ok(())
    }
}

fn map_write_error(e: DbError) -> FileStoreError {
    match e {
        DbError::Pool(e) => FileStoreError::StorageUnavailable(e.to_string()),
        other => FileStoreError::StorageWriteFailed(other.to_string()),
    }
}

fn map_read_error(e: DbError) -> FileStoreError {
    match e {
        DbError::Pool(e) => FileStoreError::StorageUnavailable(e.to_string()),
        other => FileStoreError::Storage(other.to_string()),
    }
}
